use super::tasks;
use super::KariyerApp;

impl KariyerApp {
    pub(super) fn spawn_pick_cv_file(&mut self) {
        if self.cv.begin_pick() {
            tasks::pick_cv_file(self.tx.clone());
        }
    }

    pub(super) fn spawn_analyze_cv(&mut self) {
        if let Some(file) = self.cv.begin_submit() {
            tasks::analyze_cv(self.api.clone(), self.tx.clone(), file);
        }
    }

    pub(super) fn spawn_fetch_question(&mut self) {
        if self.interview.begin_fetch_question() {
            tasks::fetch_question(self.api.clone(), self.tx.clone());
        }
    }

    pub(super) fn spawn_submit_answer(&mut self) {
        // Blank answers are reported on the interview state itself.
        if let Ok(Some(input)) = self.interview.begin_submit_answer() {
            tasks::evaluate_answer(self.api.clone(), self.tx.clone(), input);
        }
    }

    pub(super) fn spawn_load_forum_posts(&mut self) {
        if self.forum.begin_load() {
            tasks::load_forum_posts(self.api.clone(), self.tx.clone());
        }
    }

    pub(super) fn spawn_like_post(&mut self, post_id: i64) {
        let session = self.session.clone();
        let Some(card) = self.forum.card_mut(post_id) else {
            return;
        };
        if let Some(post_id) = card.begin_like(session.as_ref()) {
            tasks::like_post(self.api.clone(), self.tx.clone(), post_id);
        }
    }

    pub(super) fn spawn_load_session_user(&mut self) {
        tasks::load_session_user(self.api.clone(), self.tx.clone());
    }
}
