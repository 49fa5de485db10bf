//! Fetch
//!
//! Blocking HTTP transport for the probes. One GET per call with the fixed
//! probe headers; redirects are followed, compressed bodies are decoded.

mod client;
mod headers;

pub mod types;

pub use types::*;

use reqwest::blocking::Client;
use url::Url;

use crate::error::{ProbeError, Result};

/// Transport seam.
///
/// The probes only ever GET a URL and look at the status and body, so this
/// is the whole surface. Tests substitute scripted implementations.
pub trait Fetcher: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// GET `url` and return the final status and decoded body.
    fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

/// Default transport: one prebuilt `reqwest` blocking client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: client::build_client()?,
        })
    }
}

impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        Url::parse(url).map_err(|_| ProbeError::InvalidUrl(url.into()))?;

        let response = self
            .client
            .get(url)
            .headers(headers::probe_headers())
            .send()?;
        let status_code = response.status().as_u16();
        let body = response.text()?;

        Ok(FetchResponse { status_code, body })
    }
}
