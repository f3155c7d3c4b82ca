use eframe::egui;
use log::warn;

use crate::app::KariyerApp;
use crate::auth::UserContext;
use crate::i18n::Text;

impl KariyerApp {
    pub(crate) fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(Text::SettingsHeading.tr());
        ui.add_space(20.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(Text::SettingsBackendUrl.tr());
                ui.text_edit_singleline(&mut self.base_url_input);
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                if ui.button(Text::SettingsApply.tr()).clicked() {
                    match self.api.set_base_url(self.base_url_input.clone()) {
                        Ok(()) => {
                            self.base_url_input = self.api.base_url().to_string();
                            self.info_banner = Some(Text::SettingsUrlUpdated.tr().into());
                            self.spawn_load_session_user();
                        }
                        Err(err) => {
                            warn!("rejected backend URL {}: {err:#}", self.base_url_input);
                            self.info_banner = Some(Text::SettingsUrlInvalid.tr().into());
                        }
                    }
                }

                if ui.button(Text::SettingsReset.tr()).clicked() {
                    self.base_url_input = self.default_url.clone();
                }
            });
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(Text::SettingsSignedInAs.tr());
                match self.session.current_user() {
                    Some(user) => ui.strong(user.username),
                    None => ui.weak(Text::SettingsAnonymous.tr()),
                };
            });
        });
    }
}
