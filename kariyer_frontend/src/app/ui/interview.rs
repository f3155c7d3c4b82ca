use eframe::egui::{self, Color32, RichText};

use crate::cv::MatchBucket;
use crate::i18n::Text;
use crate::interview::InterviewStep;

use super::super::KariyerApp;

impl KariyerApp {
    pub(crate) fn render_interview(&mut self, ui: &mut egui::Ui) {
        ui.heading(Text::InterviewHeading.tr());
        ui.add_space(8.0);

        if let Some(err) = self.interview.error() {
            ui.colored_label(Color32::LIGHT_RED, err);
            ui.add_space(6.0);
        }

        let loading = self.interview.is_loading();
        match self.interview.step() {
            InterviewStep::Start => {
                ui.label(Text::InterviewIntro.tr());
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let label = if loading {
                        Text::InterviewLoadingQuestion.tr()
                    } else {
                        Text::InterviewStart.tr()
                    };
                    if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                        self.spawn_fetch_question();
                    }
                    if loading {
                        ui.add(egui::Spinner::new());
                    }
                });
            }
            InterviewStep::Interview { question, .. } => {
                let question = question.clone();
                render_question(ui, &question);
                ui.add_space(8.0);

                match self.interview.answer_mut() {
                    Some(answer) => {
                        ui.add(
                            egui::TextEdit::multiline(answer)
                                .hint_text(Text::InterviewAnswerHint.tr())
                                .desired_rows(8)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    None => {
                        ui.add_enabled_ui(false, |ui| {
                            let mut pending = String::new();
                            ui.add(
                                egui::TextEdit::multiline(&mut pending)
                                    .hint_text(Text::InterviewEvaluating.tr())
                                    .desired_rows(8)
                                    .desired_width(f32::INFINITY),
                            );
                        });
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let label = if loading {
                        Text::InterviewEvaluating.tr()
                    } else {
                        Text::InterviewSubmit.tr()
                    };
                    if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                        self.spawn_submit_answer();
                    }
                    if loading {
                        ui.add(egui::Spinner::new());
                    }
                });
            }
            InterviewStep::Result {
                question,
                answer,
                evaluation,
            } => {
                let mut restart = false;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_question(ui, question);
                    ui.add_space(6.0);
                    ui.label(RichText::new(answer).italics());
                    ui.add_space(12.0);

                    ui.heading(Text::InterviewResultHeading.tr());
                    if let Some(score) = evaluation.score {
                        let bucket = MatchBucket::from_score(score);
                        ui.label(
                            RichText::new(format!("{}: {score}/100", Text::InterviewScore.tr()))
                                .strong()
                                .color(bucket.color()),
                        );
                    }
                    ui.add_space(6.0);
                    ui.label(RichText::new(Text::InterviewFeedback.tr()).strong());
                    ui.label(&evaluation.feedback);

                    ui.add_space(12.0);
                    restart = ui.button(Text::InterviewRestart.tr()).clicked();
                });
                if restart {
                    self.interview.reset();
                }
            }
        }
    }
}

fn render_question(ui: &mut egui::Ui, question: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::vec2(12.0, 8.0))
        .show(ui, |ui| {
            ui.label(RichText::new(Text::InterviewQuestion.tr()).strong());
            ui.label(RichText::new(question).size(16.0));
        });
}
