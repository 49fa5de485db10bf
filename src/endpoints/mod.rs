//! Endpoints
//!
//! Fallback chain over the site's machine-readable surfaces: the WordPress
//! REST route for `tribe_events`, then The Events Calendar's own REST route,
//! then the RSS feed. A rung answers only on a 2xx status with the expected
//! payload shape; anything else falls through to the next rung.

mod tests;
mod utils;

pub mod types;

pub use types::*;
use utils::*;

use crate::consts;
use crate::error::Result;
use crate::fetch::Fetcher;

/// Walk the fallback chain until one endpoint answers.
///
/// When every rung misses, the error is the feed rung's, since that was the
/// last surface tried.
///
/// # Examples
///
/// ```no_run
/// use yorku_probe::endpoints;
/// use yorku_probe::fetch::ReqwestFetcher;
///
/// # fn main() -> yorku_probe::Result<()> {
/// let fetcher = ReqwestFetcher::new()?;
/// let outcome = endpoints::probe(&fetcher)?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
pub fn probe(fetcher: &dyn Fetcher) -> Result<EndpointOutcome> {
    if let Ok(outcome) = try_wp_json(fetcher) {
        return Ok(outcome);
    }
    if let Ok(outcome) = try_tec_api(fetcher) {
        return Ok(outcome);
    }
    try_feed(fetcher)
}

fn try_wp_json(fetcher: &dyn Fetcher) -> Result<EndpointOutcome> {
    let url = consts::WP_JSON_URL;
    let response = fetcher.fetch(url)?;
    require_success(url, &response)?;

    let posts = parse_wp_posts(url, &response.body)?;
    Ok(EndpointOutcome::WpJson {
        count: posts.len(),
        first_title: posts.first().map(|post| post.title.rendered.clone()),
    })
}

fn try_tec_api(fetcher: &dyn Fetcher) -> Result<EndpointOutcome> {
    let url = consts::TEC_API_URL;
    let response = fetcher.fetch(url)?;
    require_success(url, &response)?;

    let payload = parse_tec_payload(url, &response.body)?;
    Ok(EndpointOutcome::TecApi {
        count: payload.events.len(),
    })
}

fn try_feed(fetcher: &dyn Fetcher) -> Result<EndpointOutcome> {
    let url = consts::FEED_URL;
    let response = fetcher.fetch(url)?;
    require_success(url, &response)?;

    Ok(EndpointOutcome::Feed {
        body: response.into_body(),
    })
}
