use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::api::sanitize_base_url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    /// `name=value` pair seeded into the cookie jar so requests carry the session.
    pub session_cookie: Option<String>,
    pub request_timeout: Duration,
    /// Fallback identity when the service does not expose `/auth/me`.
    pub username: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_cookie: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            username: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key).and_then(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let api_url = sanitize_base_url(
            non_empty("KARIYER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;

        let session_cookie = non_empty("KARIYER_SESSION_COOKIE");
        if let Some(cookie) = &session_cookie {
            if !cookie.contains('=') {
                return Err(anyhow!(
                    "KARIYER_SESSION_COOKIE must look like name=value, got {cookie:?}"
                ));
            }
        }

        let request_timeout = match non_empty("KARIYER_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| anyhow!("KARIYER_REQUEST_TIMEOUT_SECS is not a number: {raw}"))?;
                Duration::from_secs(secs.max(1))
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            api_url,
            session_cookie,
            request_timeout,
            username: non_empty("KARIYER_USERNAME"),
        })
    }
}
