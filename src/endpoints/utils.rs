use crate::error::{ProbeError, Result};
use crate::fetch::FetchResponse;

use super::types::{TecPayload, WpPost};

/// Gate a chain rung on transport success. Non-2xx is a miss here, unlike
/// the page probe where the status is just reported.
pub(super) fn require_success(url: &str, response: &FetchResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(ProbeError::fetch_error(
        url,
        format!("HTTP status {}", response.status_code),
    ))
}

/// Parse a WP REST payload into its post array.
///
/// WordPress answers errors with a JSON object instead of an array, so a
/// disabled route fails parsing here and the chain moves on.
pub(super) fn parse_wp_posts(url: &str, body: &str) -> Result<Vec<WpPost>> {
    serde_json::from_str(body).map_err(|e| ProbeError::payload_error(url, e))
}

/// Parse a The Events Calendar REST payload.
pub(super) fn parse_tec_payload(url: &str, body: &str) -> Result<TecPayload> {
    serde_json::from_str(body).map_err(|e| ProbeError::payload_error(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/api";

    #[test]
    fn accepts_a_wp_post_array() {
        let body = r#"[{"id":9,"title":{"rendered":"Fall Convocation"},"status":"publish"}]"#;

        let posts = parse_wp_posts(URL, body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title.rendered, "Fall Convocation");
    }

    #[test]
    fn rejects_a_wp_error_object() {
        let body = r#"{"code":"rest_no_route","message":"No route was found."}"#;

        let err = parse_wp_posts(URL, body).unwrap_err();
        assert!(matches!(err, ProbeError::Payload { .. }));
    }

    #[test]
    fn reads_the_tec_event_count() {
        let body = r#"{"events":[{"id":1},{"id":2}],"total":2}"#;

        let payload = parse_tec_payload(URL, body).unwrap();
        assert_eq!(payload.events.len(), 2);
    }

    #[test]
    fn non_success_status_is_a_miss() {
        let response = FetchResponse {
            status_code: 403,
            body: "Forbidden".to_string(),
        };

        let err = require_success(URL, &response).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("request for {} failed: HTTP status 403", URL)
        );
    }

    #[test]
    fn success_status_passes() {
        let response = FetchResponse {
            status_code: 200,
            body: String::new(),
        };

        assert!(require_success(URL, &response).is_ok());
    }
}
