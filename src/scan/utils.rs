use scraper::ElementRef;

use crate::consts;
use crate::selectors::HEADING_SELECTOR;

/// Class test for a candidate. The attribute is matched as one lowercased
/// string, not per class token, so `"my-events-list"` counts.
pub(super) fn has_event_class(el: &ElementRef) -> bool {
    el.value()
        .attr("class")
        .map(|class| class.to_lowercase().contains(consts::CLASS_KEYWORD))
        .unwrap_or(false)
}

/// Title of a candidate: trimmed text of its first heading descendant in
/// document order. An empty heading still counts as a title.
pub(super) fn first_heading_text(el: &ElementRef) -> Option<String> {
    el.select(&HEADING_SELECTOR)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
}
