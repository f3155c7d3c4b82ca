use std::sync::mpsc::Sender;
use std::thread;

use log::error;

use crate::api::ApiClient;
use crate::cv::{PickOutcome, UploadedFile, ACCEPTED_EXTENSIONS};
use crate::models::EvaluateAnswerInput;

use super::messages::AppMessage;

pub fn pick_cv_file(tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let outcome = match rfd::FileDialog::new()
            .add_filter("CV", &ACCEPTED_EXTENSIONS[..])
            .pick_file()
        {
            None => PickOutcome::Cancelled,
            Some(path) => match UploadedFile::from_path(&path) {
                Ok(file) => PickOutcome::Picked(file),
                Err(err) => {
                    error!("failed to load {}: {err:#}", path.display());
                    PickOutcome::Unreadable(err.to_string())
                }
            },
        };
        if tx.send(AppMessage::CvFilePicked(outcome)).is_err() {
            error!("failed to send CvFilePicked message");
        }
    });
}

pub fn analyze_cv(client: ApiClient, tx: Sender<AppMessage>, file: UploadedFile) {
    thread::spawn(move || {
        let result = client.analyze_cv(&file);
        if tx.send(AppMessage::CvAnalyzed(result)).is_err() {
            error!("failed to send CvAnalyzed message");
        }
    });
}

pub fn fetch_question(client: ApiClient, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = client.fetch_question();
        if tx.send(AppMessage::QuestionLoaded(result)).is_err() {
            error!("failed to send QuestionLoaded message");
        }
    });
}

pub fn evaluate_answer(client: ApiClient, tx: Sender<AppMessage>, input: EvaluateAnswerInput) {
    thread::spawn(move || {
        let result = client.evaluate_answer(&input);
        if tx.send(AppMessage::AnswerEvaluated(result)).is_err() {
            error!("failed to send AnswerEvaluated message");
        }
    });
}

pub fn load_forum_posts(client: ApiClient, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = client.list_forum_posts();
        if tx.send(AppMessage::ForumPostsLoaded(result)).is_err() {
            error!("failed to send ForumPostsLoaded message");
        }
    });
}

pub fn like_post(client: ApiClient, tx: Sender<AppMessage>, post_id: i64) {
    thread::spawn(move || {
        let result = client.like_post(post_id);
        if tx.send(AppMessage::PostLiked { post_id, result }).is_err() {
            error!("failed to send PostLiked message");
        }
    });
}

pub fn load_session_user(client: ApiClient, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = client.current_user();
        if tx.send(AppMessage::SessionUserLoaded(result)).is_err() {
            error!("failed to send SessionUserLoaded message");
        }
    });
}
