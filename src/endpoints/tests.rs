#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::consts;
    use crate::endpoints::{probe, EndpointOutcome};
    use crate::error::{ProbeError, Result};
    use crate::fetch::{FetchResponse, Fetcher};

    /// Serves canned responses by URL; any other URL refuses to connect.
    struct ScriptedFetcher {
        responses: HashMap<&'static str, FetchResponse>,
    }

    impl ScriptedFetcher {
        fn new(entries: &[(&'static str, u16, &str)]) -> Self {
            let responses = entries
                .iter()
                .map(|(url, status_code, body)| {
                    (
                        *url,
                        FetchResponse {
                            status_code: *status_code,
                            body: body.to_string(),
                        },
                    )
                })
                .collect();
            Self { responses }
        }
    }

    impl Fetcher for ScriptedFetcher {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn fetch(&self, url: &str) -> Result<FetchResponse> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| ProbeError::fetch_error(url, "connection refused"))
        }
    }

    #[test]
    fn test_probe_prefers_the_wp_route() {
        let fetcher = ScriptedFetcher::new(&[(
            consts::WP_JSON_URL,
            200,
            r#"[{"title":{"rendered":"Fall Convocation"}},{"title":{"rendered":"Open House"}}]"#,
        )]);

        let outcome = probe(&fetcher).unwrap();
        assert_eq!(
            outcome,
            EndpointOutcome::WpJson {
                count: 2,
                first_title: Some("Fall Convocation".to_string()),
            }
        );
    }

    #[test]
    fn test_probe_falls_back_on_http_error() {
        let fetcher = ScriptedFetcher::new(&[
            (consts::WP_JSON_URL, 404, "not found"),
            (consts::TEC_API_URL, 200, r#"{"events":[{},{},{}]}"#),
        ]);

        let outcome = probe(&fetcher).unwrap();
        assert_eq!(outcome, EndpointOutcome::TecApi { count: 3 });
    }

    #[test]
    fn test_probe_falls_back_on_unexpected_payload() {
        // A disabled WP route answers 200 with an error object, not an array.
        let fetcher = ScriptedFetcher::new(&[
            (consts::WP_JSON_URL, 200, r#"{"code":"rest_no_route"}"#),
            (consts::TEC_API_URL, 500, "server error"),
            (
                consts::FEED_URL,
                200,
                "<rss><channel><title>Events</title></channel></rss>",
            ),
        ]);

        let outcome = probe(&fetcher).unwrap();
        match outcome {
            EndpointOutcome::Feed { body } => assert!(body.starts_with("<rss>")),
            other => panic!("expected the feed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_reports_the_feed_error_when_all_rungs_miss() {
        let fetcher = ScriptedFetcher::new(&[]);

        let err = probe(&fetcher).unwrap_err();
        match err {
            ProbeError::Fetch { url, .. } => assert_eq!(url, consts::FEED_URL),
            other => panic!("expected a fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_empty_wp_payload_still_answers() {
        let fetcher = ScriptedFetcher::new(&[(consts::WP_JSON_URL, 200, "[]")]);

        let outcome = probe(&fetcher).unwrap();
        assert_eq!(
            outcome,
            EndpointOutcome::WpJson {
                count: 0,
                first_title: None,
            }
        );
    }
}
