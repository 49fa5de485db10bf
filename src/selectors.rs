//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for the element kinds that can be event cards.
pub static CARD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article, div").expect("valid card selector"));

/// Selector for the heading kinds a card title can live in.
pub static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2, h3").expect("valid heading selector"));
