use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use eframe::egui::{self, Context};
use log::info;

use crate::api::ApiClient;
use crate::auth::SessionUser;
use crate::config::ClientConfig;
use crate::cv::CvAnalyzerState;
use crate::forum::ForumFeedState;
use crate::i18n::Text;
use crate::interview::InterviewState;
use crate::models::User;

mod messages;
mod spawners;
mod state;
mod tasks;
mod ui;

use messages::AppMessage;
use state::ViewState;

// Frame interval while a worker thread may still report back.
const PENDING_REPAINT: Duration = Duration::from_millis(150);

pub struct KariyerApp {
    api: ApiClient,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    view: ViewState,
    cv: CvAnalyzerState,
    interview: InterviewState,
    forum: ForumFeedState,
    session: Arc<SessionUser>,
    config_username: Option<String>,
    default_url: String,
    base_url_input: String,
    info_banner: Option<String>,
}

impl KariyerApp {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api = ApiClient::from_config(config)?;
        let (tx, rx) = mpsc::channel();
        let configured_user = config.username.clone().map(|username| User { id: None, username });

        let mut app = Self {
            api,
            tx,
            rx,
            view: ViewState::default(),
            cv: CvAnalyzerState::default(),
            interview: InterviewState::default(),
            forum: ForumFeedState::default(),
            session: Arc::new(SessionUser::new(configured_user)),
            config_username: config.username.clone(),
            default_url: config.api_url.clone(),
            base_url_input: config.api_url.clone(),
            info_banner: None,
        };
        info!("using backend at {}", app.api.base_url());
        app.spawn_load_session_user();
        Ok(app)
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }

    fn has_pending_work(&self) -> bool {
        self.cv.is_loading()
            || self.cv.is_picking()
            || self.interview.is_loading()
            || self.forum.is_loading()
            || self
                .forum
                .posts()
                .iter()
                .any(|p| self.forum.card(p.id).is_some_and(|c| c.is_liking()))
    }

    fn switch_view(&mut self, view: ViewState) {
        if self.view == view {
            return;
        }
        self.view = view;
        if view == ViewState::Forum && self.forum.posts().is_empty() {
            self.spawn_load_forum_posts();
        }
    }
}

impl eframe::App for KariyerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        egui::TopBottomPanel::top("top_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(Text::AppTitle.tr());
                ui.separator();
                let mut selected = self.view;
                for view in ViewState::ALL {
                    if ui.selectable_label(selected == view, view.title()).clicked() {
                        selected = view;
                    }
                }
                self.switch_view(selected);
            });

            if let Some(message) = self.info_banner.clone() {
                let mut dismiss = false;
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(message.as_str());
                            if ui.button(Text::Dismiss.tr()).clicked() {
                                dismiss = true;
                            }
                        });
                    });
                if dismiss {
                    self.info_banner = None;
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ViewState::CvAnalyzer => self.render_cv_analyzer(ui),
            ViewState::Interview => self.render_interview(ui),
            ViewState::Forum => self.render_forum(ui),
            ViewState::Settings => self.render_settings(ui),
        });

        if self.view == ViewState::Forum {
            self.render_post_detail(ctx);
        }

        if self.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        })
        .unwrap_or_else(|_| ts.to_string())
}

fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_iso_timestamps_are_formatted() {
        assert_eq!(format_timestamp("2024-03-05T14:07:00.123456"), "05.03.2024 14:07");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    }
}
