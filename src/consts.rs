//! Fixed probe inputs
//!
//! There is deliberately no configuration surface: the probe targets one
//! site, and every knob lives here as a constant.

/// Landing page for the public events calendar.
pub const EVENTS_URL: &str = "https://events.yorku.ca/";

/// WordPress REST route for the `tribe_events` post type.
pub const WP_JSON_URL: &str = "https://events.yorku.ca/wp-json/wp/v2/tribe_events?per_page=5";

/// The Events Calendar plugin's own REST route.
pub const TEC_API_URL: &str = "https://events.yorku.ca/wp-json/tribe/events/v1/events";

/// Site-wide RSS feed.
pub const FEED_URL: &str = "https://events.yorku.ca/feed/";

/// The one header every probe request carries.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Class-attribute substring that marks an element as event-related.
/// Matched case-insensitively against the whole attribute value.
pub const CLASS_KEYWORD: &str = "event";

/// Placeholder title for candidates with no `h2`/`h3` descendant.
pub const NO_TITLE: &str = "No Title";

/// How many candidates the page transcript previews.
pub const PREVIEW_LIMIT: usize = 2;

/// Preview length for candidate markup, in chars.
pub const PREVIEW_CHARS: usize = 200;

/// Preview length for the RSS feed body, in chars.
pub const FEED_PREVIEW_CHARS: usize = 500;
