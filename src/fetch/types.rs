use serde::{Deserialize, Serialize};

/// Outcome of one probe request.
///
/// Only transport-level trouble is an error in this crate. An HTTP error
/// status is data: the response still carries it, body and all, and the
/// caller decides what a 404 means for its step of the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    /// Numeric HTTP status of the final response after redirects.
    pub status_code: u16,
    /// Decoded body text.
    pub body: String,
}

impl FetchResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Consume the response and keep just the body.
    pub fn into_body(self) -> String {
        self.body
    }
}
