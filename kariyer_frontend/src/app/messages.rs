use log::{info, warn};

use crate::api::ApiError;
use crate::cv::PickOutcome;
use crate::models::{AnalysisResult, Evaluation, ForumPost, InterviewQuestion, User};

use super::KariyerApp;

pub enum AppMessage {
    CvFilePicked(PickOutcome),
    CvAnalyzed(Result<AnalysisResult, ApiError>),
    QuestionLoaded(Result<InterviewQuestion, ApiError>),
    AnswerEvaluated(Result<Evaluation, ApiError>),
    ForumPostsLoaded(Result<Vec<ForumPost>, ApiError>),
    PostLiked {
        post_id: i64,
        result: Result<(), ApiError>,
    },
    SessionUserLoaded(Result<Option<User>, ApiError>),
}

pub(super) fn process_messages(app: &mut KariyerApp) {
    while let Ok(message) = app.rx.try_recv() {
        match message {
            AppMessage::CvFilePicked(outcome) => app.cv.finish_pick(outcome),
            AppMessage::CvAnalyzed(result) => app.cv.finish_submit(result),
            AppMessage::QuestionLoaded(result) => app.interview.finish_fetch_question(result),
            AppMessage::AnswerEvaluated(result) => app.interview.finish_submit_answer(result),
            AppMessage::ForumPostsLoaded(result) => app.forum.finish_load(result),
            AppMessage::PostLiked { post_id, result } => app.forum.finish_like(post_id, result),
            AppMessage::SessionUserLoaded(result) => match result {
                Ok(Some(user)) => {
                    info!("signed in as {}", user.username);
                    app.session.set(Some(user));
                }
                Ok(None) => {
                    if app.config_username.is_none() {
                        info!("no active session; forum likes are disabled");
                        app.session.set(None);
                    }
                }
                Err(err) => {
                    warn!("could not resolve session user: {err}");
                }
            },
        }
    }
}
