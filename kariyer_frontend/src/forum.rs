use std::collections::HashMap;

use eframe::egui::Color32;
use log::{debug, info, warn};

use crate::api::ApiError;
use crate::auth::UserContext;
use crate::i18n::Text;
use crate::models::{ForumPost, PostType};

/// Lines shown while a card is collapsed.
pub const COLLAPSED_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeIcon {
    Megaphone,
    Comment,
    Eye,
}

impl TypeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            TypeIcon::Megaphone => "📢",
            TypeIcon::Comment => "💬",
            TypeIcon::Eye => "👁",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Warning,
    Info,
    Success,
    Default,
}

impl BadgeColor {
    pub fn color32(self) -> Color32 {
        match self {
            BadgeColor::Warning => Color32::from_rgb(255, 193, 7),
            BadgeColor::Info => Color32::from_rgb(13, 202, 240),
            BadgeColor::Success => Color32::from_rgb(25, 135, 84),
            BadgeColor::Default => Color32::GRAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBadge {
    pub icon: TypeIcon,
    pub color: BadgeColor,
    pub label: &'static str,
}

pub fn type_badge(post_type: PostType) -> TypeBadge {
    let (icon, color, label) = match post_type {
        PostType::Announcement => (TypeIcon::Megaphone, BadgeColor::Warning, Text::PostAnnouncement),
        PostType::Question => (TypeIcon::Comment, BadgeColor::Info, Text::PostQuestion),
        PostType::Resource => (TypeIcon::Eye, BadgeColor::Success, Text::PostResource),
        PostType::Tutorial => (TypeIcon::Comment, BadgeColor::Default, Text::PostTutorial),
        PostType::Discussion => (TypeIcon::Comment, BadgeColor::Default, Text::PostDiscussion),
    };
    TypeBadge {
        icon,
        color,
        label: label.tr(),
    }
}

/// Card border/background. Admin styling beats solved styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTreatment {
    Admin,
    Solved,
    Neutral,
}

impl CardTreatment {
    pub fn of(post: &ForumPost) -> Self {
        if post.is_admin_post {
            CardTreatment::Admin
        } else if post.is_solved {
            CardTreatment::Solved
        } else {
            CardTreatment::Neutral
        }
    }

    pub fn stroke(self) -> Color32 {
        match self {
            CardTreatment::Admin => Color32::from_rgb(255, 193, 7),
            CardTreatment::Solved => Color32::from_rgb(25, 135, 84),
            CardTreatment::Neutral => Color32::from_rgb(80, 90, 130),
        }
    }

    pub fn fill(self) -> Color32 {
        match self {
            CardTreatment::Admin => Color32::from_rgb(58, 48, 24),
            CardTreatment::Solved => Color32::from_rgb(24, 50, 36),
            CardTreatment::Neutral => Color32::from_rgb(30, 30, 38),
        }
    }
}

/// What a card asks its parent to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCardAction {
    View(i64),
    Comment(i64),
    LikeChanged { post_id: i64, liked: bool },
}

/// Client-owned state of one post card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardState {
    post_id: i64,
    liked: bool,
    expanded: bool,
    /// Target `liked` value of the request in flight.
    pending_like: Option<bool>,
}

impl PostCardState {
    pub fn new(post: &ForumPost) -> Self {
        Self {
            post_id: post.id,
            liked: post.user_liked,
            expanded: false,
            pending_like: None,
        }
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_liking(&self) -> bool {
        self.pending_like.is_some()
    }

    pub fn toggle_expand(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Returns the post id to like, or `None` when nobody is signed in or a
    /// like request is already in flight.
    pub fn begin_like(&mut self, users: &dyn UserContext) -> Option<i64> {
        if self.pending_like.is_some() {
            return None;
        }
        if users.current_user().is_none() {
            debug!("ignoring like on post {} without a signed-in user", self.post_id);
            return None;
        }
        self.pending_like = Some(!self.liked);
        Some(self.post_id)
    }

    /// Applies the server answer. On success `liked` becomes the value asked
    /// for in `begin_like`, even if a reload changed it meanwhile. Failures
    /// are logged and otherwise invisible.
    pub fn finish_like(&mut self, outcome: Result<(), ApiError>) -> Option<PostCardAction> {
        let target = self.pending_like.take();
        match outcome {
            Ok(()) => {
                self.liked = target.unwrap_or(!self.liked);
                Some(PostCardAction::LikeChanged {
                    post_id: self.post_id,
                    liked: self.liked,
                })
            }
            Err(err) => {
                warn!("like on post {} failed: {err}", self.post_id);
                None
            }
        }
    }

    pub fn view(&self) -> PostCardAction {
        PostCardAction::View(self.post_id)
    }

    pub fn comment(&self) -> PostCardAction {
        PostCardAction::Comment(self.post_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    Post,
    Comments,
}

/// Parent of the cards: the loaded posts and their card states.
#[derive(Debug, Default)]
pub struct ForumFeedState {
    posts: Vec<ForumPost>,
    cards: HashMap<i64, PostCardState>,
    loading: bool,
    error: Option<String>,
    detail: Option<(i64, DetailFocus)>,
}

impl ForumFeedState {
    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn card(&self, post_id: i64) -> Option<&PostCardState> {
        self.cards.get(&post_id)
    }

    pub fn card_mut(&mut self, post_id: i64) -> Option<&mut PostCardState> {
        self.cards.get_mut(&post_id)
    }

    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish_load(&mut self, outcome: Result<Vec<ForumPost>, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(posts) => {
                info!("loaded {} forum posts", posts.len());
                let previous = std::mem::take(&mut self.cards);
                self.cards = posts
                    .iter()
                    .map(|post| {
                        let card = match previous.get(&post.id) {
                            Some(old) => PostCardState {
                                liked: post.user_liked,
                                ..old.clone()
                            },
                            None => PostCardState::new(post),
                        };
                        (post.id, card)
                    })
                    .collect();
                self.posts = posts;
                if let Some((id, _)) = self.detail {
                    if !self.cards.contains_key(&id) {
                        self.detail = None;
                    }
                }
            }
            Err(err) => {
                warn!("loading forum posts failed: {err}");
                self.error = Some(err.user_message(Text::ForumLoadError));
            }
        }
    }

    pub fn finish_like(&mut self, post_id: i64, outcome: Result<(), ApiError>) {
        let action = match self.cards.get_mut(&post_id) {
            Some(card) => card.finish_like(outcome),
            None => {
                debug!("like answer for unknown post {post_id}");
                None
            }
        };
        if let Some(action) = action {
            self.handle(action);
        }
    }

    /// Reacts to a card's request.
    pub fn handle(&mut self, action: PostCardAction) {
        match action {
            PostCardAction::View(id) => self.detail = Some((id, DetailFocus::Post)),
            PostCardAction::Comment(id) => self.detail = Some((id, DetailFocus::Comments)),
            PostCardAction::LikeChanged { post_id, liked } => {
                if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                    if post.user_liked != liked {
                        post.likes_count = if liked {
                            post.likes_count.saturating_add(1)
                        } else {
                            post.likes_count.saturating_sub(1)
                        };
                    }
                    post.user_liked = liked;
                }
            }
        }
    }

    pub fn detail(&self) -> Option<(&ForumPost, DetailFocus)> {
        let (id, focus) = self.detail?;
        self.posts.iter().find(|p| p.id == id).map(|post| (post, focus))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use pretty_assertions::assert_eq;

    fn post(id: i64) -> ForumPost {
        ForumPost {
            id,
            title: format!("Gönderi {id}"),
            likes_count: 4,
            ..ForumPost::default()
        }
    }

    fn signed_in() -> Option<User> {
        Some(User {
            id: Some(1),
            username: "ali".into(),
        })
    }

    #[test]
    fn type_mapping_is_fixed() {
        let cases = [
            (PostType::Announcement, TypeIcon::Megaphone, BadgeColor::Warning, "Duyuru"),
            (PostType::Question, TypeIcon::Comment, BadgeColor::Info, "Soru"),
            (PostType::Resource, TypeIcon::Eye, BadgeColor::Success, "Kaynak"),
            (PostType::Tutorial, TypeIcon::Comment, BadgeColor::Default, "Öğretici"),
            (PostType::Discussion, TypeIcon::Comment, BadgeColor::Default, "Tartışma"),
        ];
        for (post_type, icon, color, label) in cases {
            assert_eq!(type_badge(post_type), TypeBadge { icon, color, label });
        }
    }

    #[test]
    fn admin_treatment_wins_over_solved() {
        let mut p = post(1);
        p.is_admin_post = true;
        p.is_solved = true;
        assert_eq!(CardTreatment::of(&p), CardTreatment::Admin);

        p.is_admin_post = false;
        assert_eq!(CardTreatment::of(&p), CardTreatment::Solved);

        p.is_solved = false;
        assert_eq!(CardTreatment::of(&p), CardTreatment::Neutral);
    }

    #[test]
    fn like_without_user_is_a_no_op() {
        let mut card = PostCardState::new(&post(1));
        let anonymous: Option<User> = None;
        assert_eq!(card.begin_like(&anonymous), None);
        assert!(!card.is_liking());
        assert!(!card.liked());
    }

    #[test]
    fn like_flips_only_after_acknowledgment() {
        let mut card = PostCardState::new(&post(1));
        assert_eq!(card.begin_like(&signed_in()), Some(1));
        assert!(!card.liked());
        assert_eq!(card.begin_like(&signed_in()), None);

        let action = card.finish_like(Ok(()));
        assert!(card.liked());
        assert_eq!(action, Some(PostCardAction::LikeChanged { post_id: 1, liked: true }));
    }

    #[test]
    fn rejected_like_leaves_state_alone() {
        let mut liked_post = post(2);
        liked_post.user_liked = true;
        let mut card = PostCardState::new(&liked_post);
        card.begin_like(&signed_in());

        let action = card.finish_like(Err(ApiError::Rejected {
            status: 403,
            message: None,
        }));
        assert_eq!(action, None);
        assert!(card.liked());
        assert!(!card.is_liking());
    }

    #[test]
    fn expand_toggles() {
        let mut card = PostCardState::new(&post(1));
        card.toggle_expand();
        assert!(card.expanded());
        card.toggle_expand();
        assert!(!card.expanded());
    }

    #[test]
    fn feed_updates_count_when_card_reports_like() {
        let mut feed = ForumFeedState::default();
        feed.begin_load();
        feed.finish_load(Ok(vec![post(1), post(2)]));

        feed.card_mut(1).unwrap().begin_like(&signed_in());
        feed.finish_like(1, Ok(()));
        assert_eq!(feed.posts()[0].likes_count, 5);
        assert!(feed.posts()[0].user_liked);

        feed.card_mut(1).unwrap().begin_like(&signed_in());
        feed.finish_like(1, Ok(()));
        assert_eq!(feed.posts()[0].likes_count, 4);
        assert!(!feed.card(1).unwrap().liked());
    }

    #[test]
    fn view_and_comment_open_detail() {
        let mut feed = ForumFeedState::default();
        feed.finish_load(Ok(vec![post(9)]));

        let card = feed.card(9).unwrap().clone();
        feed.handle(card.comment());
        let (shown, focus) = feed.detail().unwrap();
        assert_eq!(shown.id, 9);
        assert_eq!(focus, DetailFocus::Comments);

        feed.handle(card.view());
        assert_eq!(feed.detail().map(|(_, f)| f), Some(DetailFocus::Post));

        feed.close_detail();
        assert!(feed.detail().is_none());
    }

    #[test]
    fn reload_keeps_expansion() {
        let mut feed = ForumFeedState::default();
        feed.finish_load(Ok(vec![post(1)]));
        feed.card_mut(1).unwrap().toggle_expand();

        feed.finish_load(Ok(vec![post(1), post(3)]));
        assert!(feed.card(1).unwrap().expanded());
        assert!(!feed.card(3).unwrap().expanded());
    }

    #[test]
    fn reload_during_like_keeps_acknowledged_state() {
        let mut feed = ForumFeedState::default();
        feed.finish_load(Ok(vec![post(1)]));
        feed.card_mut(1).unwrap().begin_like(&signed_in());

        let mut refreshed = post(1);
        refreshed.user_liked = true;
        refreshed.likes_count = 5;
        feed.finish_load(Ok(vec![refreshed]));
        assert!(feed.card(1).unwrap().is_liking());

        feed.finish_like(1, Ok(()));
        let card = feed.card(1).unwrap();
        assert!(card.liked());
        assert!(!card.is_liking());
        assert!(feed.posts()[0].user_liked);
        assert_eq!(feed.posts()[0].likes_count, 5);
    }
}
