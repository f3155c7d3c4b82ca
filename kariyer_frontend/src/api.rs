use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::cookie::Jar;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::cv::UploadedFile;
use crate::i18n::Text;
use crate::models::{
    AnalysisResult, EvaluateAnswerInput, Evaluation, ForumPost, ForumPostsResponse,
    InterviewQuestion, User, UserResponse,
};

/// Multipart field the CV analysis endpoint reads the upload from.
pub const CV_FIELD_NAME: &str = "cv_file";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("upload could not be encoded: {0}")]
    InvalidUpload(#[source] reqwest::Error),
    #[error("request could not be completed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Message shown to the user. A server supplied `error` wins, transport
    /// failures get the shared connectivity text, everything else `fallback`.
    pub fn user_message(&self, fallback: Text) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Transport(_) => Text::ConnectionError.tr().to_string(),
            _ => fallback.tr().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    cookies: Arc<Jar>,
    session_cookie: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig {
            api_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = sanitize_base_url(config.api_url.clone())?;
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .timeout(config.request_timeout.max(Duration::from_secs(1)))
            .build()
            .context("failed to build HTTP client")?;
        let api = Self {
            base_url,
            client,
            cookies,
            session_cookie: config.session_cookie.clone(),
        };
        api.seed_session_cookie()?;
        Ok(api)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        self.base_url = sanitize_base_url(base_url.into())?;
        self.seed_session_cookie()
    }

    /// Uploads a CV for analysis under [`CV_FIELD_NAME`].
    pub fn analyze_cv(&self, file: &UploadedFile) -> Result<AnalysisResult, ApiError> {
        let url = self.url("/advanced_cv_job_search")?;
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(ApiError::InvalidUpload)?;
        let form = Form::new().part(CV_FIELD_NAME, part);
        debug!("uploading {} ({} bytes) for analysis", file.name, file.size);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(ApiError::Transport)?;
        check(response)?.json().map_err(ApiError::Decode)
    }

    pub fn fetch_question(&self) -> Result<InterviewQuestion, ApiError> {
        let url = self.url("/interview_simulation")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .map_err(ApiError::Transport)?;
        check(response)?.json().map_err(ApiError::Decode)
    }

    pub fn evaluate_answer(&self, input: &EvaluateAnswerInput) -> Result<Evaluation, ApiError> {
        let url = self.url("/interview_simulation/evaluate")?;
        let response = self
            .client
            .post(url)
            .json(input)
            .send()
            .map_err(ApiError::Transport)?;
        check(response)?.json().map_err(ApiError::Decode)
    }

    pub fn list_forum_posts(&self) -> Result<Vec<ForumPost>, ApiError> {
        let url = self.url("/forum/posts")?;
        let response = self.client.get(url).send().map_err(ApiError::Transport)?;
        let listing: ForumPostsResponse = check(response)?.json().map_err(ApiError::Decode)?;
        Ok(listing.into_posts())
    }

    /// Any 2xx counts as acknowledged; the body is ignored.
    pub fn like_post(&self, post_id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/forum/posts/{post_id}/like"))?;
        let response = self.client.post(url).send().map_err(ApiError::Transport)?;
        check(response)?;
        Ok(())
    }

    /// `Ok(None)` when the session is anonymous (401/403).
    pub fn current_user(&self) -> Result<Option<User>, ApiError> {
        let url = self.url("/auth/me")?;
        let response = self.client.get(url).send().map_err(ApiError::Transport)?;
        match check(response) {
            Ok(response) => {
                let user: UserResponse = response.json().map_err(ApiError::Decode)?;
                Ok(Some(user.into_user()))
            }
            Err(ApiError::Rejected { status: 401 | 403, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    fn seed_session_cookie(&self) -> Result<()> {
        if let Some(cookie) = &self.session_cookie {
            let url = Url::parse(&self.base_url).context("invalid base URL")?;
            self.cookies.add_cookie_str(cookie, &url);
        }
        Ok(())
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty());
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

pub(crate) fn sanitize_base_url(mut base: String) -> Result<String> {
    base = base.trim().to_string();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("http://{base}");
    }
    while base.ends_with('/') {
        base.pop();
    }
    let _ = Url::parse(&base).context("invalid base URL")?;
    Ok(base)
}
