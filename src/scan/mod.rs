//! Scan
//!
//! The HTML half of the page probe: find every element that looks like an
//! event card and materialize what the report needs from each one. No I/O
//! happens here, so the whole module runs on fixture strings in tests.

mod utils;

pub mod types;

pub use types::*;
use utils::*;

use scraper::Html;

use crate::selectors::CARD_SELECTOR;

/// Scan HTML for event-card candidates.
///
/// A candidate is any `article` or `div`, anywhere in the tree, whose class
/// attribute contains `event` case-insensitively. Candidates come back in
/// document order; an element nested inside another candidate is still its
/// own candidate.
///
/// # Examples
///
/// ```
/// use yorku_probe::scan::scan;
///
/// let html = r#"<div class="Event-Card"><h2>Talk A</h2></div>"#;
/// let result = scan(html);
/// assert_eq!(result.count(), 1);
/// assert_eq!(result.candidates[0].title.as_deref(), Some("Talk A"));
/// ```
pub fn scan(html: &str) -> EventScan {
    let doc = Html::parse_document(html);

    let candidates = doc
        .select(&CARD_SELECTOR)
        .filter(has_event_class)
        .map(|el| EventCandidate {
            title: first_heading_text(&el),
            markup: el.html(),
        })
        .collect();

    EventScan { candidates }
}
