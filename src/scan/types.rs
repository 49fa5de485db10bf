use serde::{Deserialize, Serialize};

/// One element that looks like an event card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCandidate {
    /// Trimmed text of the element's first `h2`/`h3` descendant, if any.
    /// `Some("")` when the heading exists but is empty.
    pub title: Option<String>,
    /// The element's full serialized markup, outer tag included.
    pub markup: String,
}

/// Everything a scan found, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScan {
    pub candidates: Vec<EventCandidate>,
}

impl EventScan {
    /// Number of candidates found.
    pub fn count(&self) -> usize {
        self.candidates.len()
    }
}
