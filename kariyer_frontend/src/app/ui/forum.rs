use eframe::egui::{self, Color32, Margin, RichText};

use crate::auth::UserContext;
use crate::forum::{
    type_badge, CardTreatment, DetailFocus, PostCardAction, PostCardState, COLLAPSED_LINES,
};
use crate::i18n::Text;
use crate::models::ForumPost;

use super::super::{format_timestamp, KariyerApp};

/// Clicks a card reports back for the app to act on after rendering.
enum CardIntent {
    Like(i64),
    Card(PostCardAction),
}

impl KariyerApp {
    pub(crate) fn render_forum(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(Text::ForumHeading.tr());
            let loading = self.forum.is_loading();
            if ui
                .add_enabled(!loading, egui::Button::new(Text::ForumRefresh.tr()))
                .clicked()
            {
                self.spawn_load_forum_posts();
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
        });
        ui.add_space(8.0);

        if let Some(err) = self.forum.error() {
            ui.colored_label(Color32::LIGHT_RED, err);
            if ui.button(Text::Retry.tr()).clicked() {
                self.spawn_load_forum_posts();
            }
            ui.separator();
        }

        let signed_in = self.session.current_user().is_some();
        let mut intents = Vec::new();
        egui::ScrollArea::vertical().show(ui, |ui| {
            if self.forum.posts().is_empty() && !self.forum.is_loading() {
                ui.weak(Text::ForumEmpty.tr());
            }
            let mut toggled = Vec::new();
            for post in self.forum.posts() {
                let Some(card) = self.forum.card(post.id) else {
                    continue;
                };
                let (intent, toggle) = render_post_card(ui, post, card, signed_in);
                intents.extend(intent);
                if toggle {
                    toggled.push(post.id);
                }
                ui.add_space(8.0);
            }
            for post_id in toggled {
                if let Some(card) = self.forum.card_mut(post_id) {
                    card.toggle_expand();
                }
            }
        });

        for intent in intents {
            match intent {
                CardIntent::Like(post_id) => self.spawn_like_post(post_id),
                CardIntent::Card(action) => self.forum.handle(action),
            }
        }
    }

    pub(crate) fn render_post_detail(&mut self, ctx: &egui::Context) {
        let Some((post, focus)) = self.forum.detail() else {
            return;
        };
        let post = post.clone();
        let mut open = true;
        let mut close_clicked = false;

        egui::Window::new(RichText::new(&post.title).strong())
            .id(egui::Id::new(("forum_post_detail", post.id)))
            .open(&mut open)
            .default_width(560.0)
            .collapsible(false)
            .show(ctx, |ui| {
                render_post_meta(ui, &post);
                ui.separator();
                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    ui.label(&post.content);
                });
                render_tags(ui, &post.tags);

                if focus == DetailFocus::Comments {
                    ui.separator();
                    ui.label(RichText::new(Text::ForumCommentsHeading.tr()).strong());
                    ui.label(format!("{} {}", post.comments_count, Text::ForumComments.tr()));
                }

                ui.add_space(8.0);
                close_clicked = ui.button(Text::ForumClose.tr()).clicked();
            });

        if !open || close_clicked {
            self.forum.close_detail();
        }
    }
}

fn render_post_card(
    ui: &mut egui::Ui,
    post: &ForumPost,
    card: &PostCardState,
    signed_in: bool,
) -> (Option<CardIntent>, bool) {
    let treatment = CardTreatment::of(post);
    let badge = type_badge(post.post_type);
    let mut intent = None;
    let mut toggle = false;

    egui::Frame::none()
        .fill(treatment.fill())
        .stroke(egui::Stroke::new(1.5, treatment.stroke()))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(format!("{} {}", badge.icon.glyph(), badge.label))
                        .color(badge.color.color32())
                        .strong(),
                );
                if post.is_admin_post {
                    ui.label(
                        RichText::new(Text::ForumAdminBadge.tr())
                            .color(CardTreatment::Admin.stroke())
                            .strong(),
                    );
                }
                if post.is_solved {
                    ui.label(
                        RichText::new(format!("✔ {}", Text::ForumSolvedBadge.tr()))
                            .color(CardTreatment::Solved.stroke())
                            .strong(),
                    );
                }
            });

            if ui
                .add(egui::Link::new(RichText::new(&post.title).strong().size(16.0)))
                .clicked()
            {
                intent = Some(CardIntent::Card(card.view()));
            }

            ui.add_space(4.0);
            render_content(ui, &post.content, card.expanded());
            if !post.content.is_empty() {
                let label = if card.expanded() {
                    Text::ForumShowLess.tr()
                } else {
                    Text::ForumShowMore.tr()
                };
                toggle = ui.small_button(label).clicked();
            }

            ui.add_space(4.0);
            render_post_meta(ui, post);
            render_tags(ui, &post.tags);

            if post.is_solved {
                if let Some(solver) = &post.solved_by {
                    let when = post
                        .solved_at
                        .as_deref()
                        .map(|ts| format!(" · {}", format_timestamp(ts)))
                        .unwrap_or_default();
                    ui.label(
                        RichText::new(format!("{}: {solver}{when}", Text::ForumSolvedBy.tr()))
                            .color(CardTreatment::Solved.stroke()),
                    );
                }
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let (glyph, like_label) = if card.liked() {
                    ("❤", Text::ForumUnlike.tr())
                } else {
                    ("♡", Text::ForumLike.tr())
                };
                let like_button = egui::Button::new(format!("{glyph} {}", post.likes_count));
                let response = ui
                    .add_enabled(signed_in && !card.is_liking(), like_button)
                    .on_hover_text(like_label)
                    .on_disabled_hover_text(Text::ForumSignInToLike.tr());
                if response.clicked() {
                    intent = Some(CardIntent::Like(card.post_id()));
                }
                if ui
                    .button(format!("💬 {}", Text::ForumComment.tr()))
                    .clicked()
                {
                    intent = Some(CardIntent::Card(card.comment()));
                }
                if ui.button(format!("👁 {}", Text::ForumView.tr())).clicked() {
                    intent = Some(CardIntent::Card(card.view()));
                }
            });
        });

    (intent, toggle)
}

fn render_content(ui: &mut egui::Ui, content: &str, expanded: bool) {
    if expanded {
        ui.label(content);
        return;
    }
    let mut job = egui::text::LayoutJob::single_section(
        content.to_owned(),
        egui::TextFormat {
            font_id: egui::TextStyle::Body.resolve(ui.style()),
            color: ui.visuals().text_color(),
            ..Default::default()
        },
    );
    job.wrap = egui::text::TextWrapping {
        max_width: ui.available_width(),
        max_rows: COLLAPSED_LINES,
        break_anywhere: false,
        overflow_character: Some('…'),
    };
    let galley = ui.fonts(|fonts| fonts.layout_job(job));
    ui.label(galley);
}

fn render_post_meta(ui: &mut egui::Ui, post: &ForumPost) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(&post.author).strong());
        ui.weak(format_timestamp(&post.created_at));
        ui.weak(format!("👁 {} {}", post.views, Text::ForumViews.tr()));
        ui.weak(format!("❤ {}", post.likes_count));
        ui.weak(format!("💬 {} {}", post.comments_count, Text::ForumComments.tr()));
    });
}

fn render_tags(ui: &mut egui::Ui, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            ui.label(
                RichText::new(format!("#{tag}"))
                    .small()
                    .color(Color32::from_rgb(120, 140, 200)),
            );
        }
    });
}
