use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendered-content wrapper WordPress puts on post fields.
#[derive(Debug, Clone, Deserialize)]
pub struct WpRendered {
    pub rendered: String,
}

/// The slice of a WP REST post the probe reads. Everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WpPost {
    pub title: WpRendered,
}

/// The slice of a The Events Calendar REST payload the probe reads.
#[derive(Debug, Clone, Deserialize)]
pub struct TecPayload {
    pub events: Vec<Value>,
}

/// Which rung of the fallback chain answered, and with what.
///
/// A later variant means every earlier rung missed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "endpoint")]
pub enum EndpointOutcome {
    /// The WP REST route for `tribe_events` answered with a post array.
    WpJson {
        count: usize,
        first_title: Option<String>,
    },
    /// The Events Calendar's own REST route answered.
    TecApi { count: usize },
    /// Only the RSS feed answered. Body kept verbatim.
    Feed { body: String },
}
