use eframe::egui::{self, Color32, RichText};
use log::warn;

use crate::cv::{summary_text, MatchBucket};
use crate::i18n::{self, Text};
use crate::models::{AnalysisResult, CvAnalysis, JobMatch};

use super::super::{format_file_size, format_timestamp, KariyerApp};

impl KariyerApp {
    pub(crate) fn render_cv_analyzer(&mut self, ui: &mut egui::Ui) {
        ui.heading(Text::CvHeading.tr());
        ui.add_space(8.0);

        if let Some(err) = self.cv.error() {
            ui.colored_label(Color32::LIGHT_RED, err);
            ui.add_space(6.0);
        }

        if self.cv.result().is_some() {
            if ui.button(Text::CvNewAnalysis.tr()).clicked() {
                self.cv.reset_analysis();
                return;
            }
            ui.add_space(8.0);
            if let Some(result) = self.cv.result() {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_analysis(ui, result);
                });
            }
            return;
        }

        self.render_upload_form(ui);
    }

    fn render_upload_form(&mut self, ui: &mut egui::Ui) {
        ui.label(Text::CvIntro.tr());
        ui.add_space(12.0);

        let loading = self.cv.is_loading();
        ui.group(|ui| {
            ui.horizontal(|ui| {
                let picking = self.cv.is_picking();
                if ui
                    .add_enabled(!loading && !picking, egui::Button::new(Text::CvChooseFile.tr()))
                    .clicked()
                {
                    self.spawn_pick_cv_file();
                }
                match self.cv.selected() {
                    Some(file) => {
                        ui.label(RichText::new(&file.name).strong());
                        ui.weak(format_file_size(file.size));
                    }
                    None if !loading => {
                        ui.weak(Text::CvNoFileSelected.tr());
                    }
                    None => {}
                }
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let label = if loading {
                Text::CvAnalyzing.tr()
            } else {
                Text::CvAnalyze.tr()
            };
            if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                self.spawn_analyze_cv();
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
        });
    }
}

fn render_analysis(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.heading(Text::CvProfileHeading.tr());
    render_profile(ui, &result.cv_analysis);

    if !result.job_areas.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new(Text::CvJobAreas.tr()).strong());
        for (rank, area) in result.job_areas.iter().enumerate() {
            ui.label(format!("{}. {area}", rank + 1));
        }
    }

    ui.add_space(16.0);
    ui.heading(Text::CvMatchesHeading.tr());
    ui.label(summary_text(result));
    ui.add_space(8.0);

    if result.top_matches.is_empty() {
        ui.weak(Text::CvNoMatches.tr());
    }
    for job_match in &result.top_matches {
        render_match(ui, job_match);
        ui.add_space(8.0);
    }

    if !result.analysis_date.is_empty() {
        ui.add_space(8.0);
        ui.weak(format!(
            "{}: {}",
            Text::CvAnalysisDate.tr(),
            format_timestamp(&result.analysis_date)
        ));
    }
}

fn render_profile(ui: &mut egui::Ui, analysis: &CvAnalysis) {
    egui::Grid::new("cv_profile_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new(Text::CvExperience.tr()).strong());
            ui.label(i18n::experience_years(analysis.experience_years));
            ui.end_row();

            list_row(ui, Text::CvSkills, &analysis.skills);
            list_row(ui, Text::CvEducation, &analysis.education);
            list_row(ui, Text::CvLanguages, &analysis.languages);
        });
}

fn list_row(ui: &mut egui::Ui, title: Text, items: &[String]) {
    ui.label(RichText::new(title.tr()).strong());
    ui.horizontal_wrapped(|ui| {
        if items.is_empty() {
            ui.weak("-");
        }
        for item in items {
            ui.label(RichText::new(item).background_color(ui.visuals().faint_bg_color));
        }
    });
    ui.end_row();
}

fn render_match(ui: &mut egui::Ui, job_match: &JobMatch) {
    let bucket = MatchBucket::from_score(job_match.match_score);
    let job = &job_match.job;

    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::vec2(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&job.title).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("%{} · {}", job_match.match_score, bucket.label()))
                            .color(bucket.color())
                            .strong(),
                    );
                });
            });
            ui.label(format!("{} · {}", job.company, job.location));
            if !job.description.is_empty() {
                ui.add_space(4.0);
                ui.label(&job.description);
            }
            if let Some(requirements) = job.requirements.as_deref().filter(|r| !r.is_empty()) {
                ui.add_space(4.0);
                ui.label(RichText::new(Text::CvRequirements.tr()).strong());
                ui.label(requirements);
            }

            bullet_list(ui, Text::CvMatchReasons, &job_match.match_reasons, Color32::LIGHT_GREEN);
            if let Some(missing) = &job_match.missing_skills {
                bullet_list(ui, Text::CvMissingSkills, missing, Color32::LIGHT_RED);
            }
            if let Some(recommendations) = &job_match.recommendations {
                bullet_list(ui, Text::CvRecommendations, recommendations, Color32::LIGHT_BLUE);
            }

            if let Some(url) = job.url.as_deref().filter(|u| !u.is_empty()) {
                ui.add_space(4.0);
                if ui.button(Text::CvOpenPosting.tr()).clicked() {
                    if let Err(err) = open::that(url) {
                        warn!("failed to open {url}: {err}");
                    }
                }
            }
        });
}

fn bullet_list(ui: &mut egui::Ui, title: Text, items: &[String], color: Color32) {
    if items.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.label(RichText::new(title.tr()).strong().color(color));
    for item in items {
        ui.label(format!("• {item}"));
    }
}
