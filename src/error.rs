use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Everything a probe run can fail with.
///
/// Every variant renders as a single line; the CLI prints whichever one
/// surfaces as `Error: <message>` and still exits 0.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unexpected payload from {url}: {reason}")]
    Payload { url: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ProbeError {
    pub fn fetch_error(url: &str, reason: impl fmt::Display) -> Self {
        ProbeError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn payload_error(url: &str, reason: impl fmt::Display) -> Self {
        ProbeError::Payload {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for ProbeError {
    fn from(e: std::io::Error) -> Self {
        ProbeError::Other(e.to_string())
    }
}
impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::Other(e.to_string())
    }
}
impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        // The variant message already names the URL once.
        match e.url().cloned() {
            Some(u) => ProbeError::fetch_error(u.as_str(), e.without_url()),
            None => ProbeError::Other(e.to_string()),
        }
    }
}
