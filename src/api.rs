//! Public API
//!
//! High-level probe entrypoints plus the component wiring they run on.
//! Everything here is what `main.rs` (and library callers) interact with.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts;
use crate::endpoints::{self, EndpointOutcome};
use crate::error::Result;
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::scan::{self, EventScan};

// Helper functions for logging - ignore errors to not break probe runs
fn log_info(domain: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
    match crate::log::ActivityLogger::new() {
        Ok(logger) => logger.info(domain, event, details),
        Err(_) => Ok(()), // Silently ignore logging errors
    }
}

fn log_error(domain: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
    match crate::log::ActivityLogger::new() {
        Ok(logger) => logger.error(domain, event, details),
        Err(_) => Ok(()), // Silently ignore logging errors
    }
}

fn domain_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.domain().map(|d| d.to_string()))
}

/* ------------ components ------------ */

/// The swappable pieces a probe run needs. Today that is just the transport.
pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
}

impl Default for Components {
    fn default() -> Self {
        let fetcher = ReqwestFetcher::new().expect("failed to init reqwest client");
        Self {
            fetcher: Box::new(fetcher),
        }
    }
}

/* ------------ probe outcomes ------------ */

/// Outcome of a page probe: the transport status plus the element scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProbe {
    pub status_code: u16,
    pub scan: EventScan,
}

/* ------------ probe entrypoints ------------ */

/// Fetch the events page and scan it for event-card candidates.
///
/// An HTTP error status is not a failure here: the status is reported and
/// the body scanned either way. Only transport-level trouble errors out.
///
/// # Examples
///
/// ```no_run
/// use yorku_probe::{probe_page, Components};
///
/// # fn main() -> yorku_probe::Result<()> {
/// let probe = probe_page(&Components::default())?;
/// println!("{} candidates", probe.scan.count());
/// # Ok(())
/// # }
/// ```
pub fn probe_page(components: &Components) -> Result<PageProbe> {
    let url = consts::EVENTS_URL;
    let domain = domain_of(url);
    let start_time = Instant::now();

    let result = components.fetcher.fetch(url).map(|response| PageProbe {
        status_code: response.status_code,
        scan: scan::scan(&response.body),
    });

    let duration = start_time.elapsed();
    match &result {
        Ok(probe) => {
            let details = format!(
                "status {} with {} candidates in {}ms",
                probe.status_code,
                probe.scan.count(),
                duration.as_millis()
            );
            let _ = log_info(domain.as_deref(), "probe_page", Some(&details));
        }
        Err(e) => {
            let details = format!("failed in {}ms: {}", duration.as_millis(), e);
            let _ = log_error(domain.as_deref(), "probe_page", Some(&details));
        }
    }

    result
}

/// Walk the endpoint fallback chain: WP REST, then TEC REST, then RSS.
///
/// # Examples
///
/// ```no_run
/// use yorku_probe::{probe_endpoints, Components};
///
/// # fn main() -> yorku_probe::Result<()> {
/// let outcome = probe_endpoints(&Components::default())?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
pub fn probe_endpoints(components: &Components) -> Result<EndpointOutcome> {
    let domain = domain_of(consts::EVENTS_URL);
    let start_time = Instant::now();

    let result = endpoints::probe(&*components.fetcher);

    let duration = start_time.elapsed();
    match &result {
        Ok(outcome) => {
            let rung = match outcome {
                EndpointOutcome::WpJson { .. } => "wp-json",
                EndpointOutcome::TecApi { .. } => "tec-api",
                EndpointOutcome::Feed { .. } => "feed",
            };
            let details = format!("{} answered in {}ms", rung, duration.as_millis());
            let _ = log_info(domain.as_deref(), "probe_endpoints", Some(&details));
        }
        Err(e) => {
            let details = format!("all rungs missed in {}ms: {}", duration.as_millis(), e);
            let _ = log_error(domain.as_deref(), "probe_endpoints", Some(&details));
        }
    }

    result
}
