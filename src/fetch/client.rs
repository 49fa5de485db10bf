use reqwest::blocking::Client;
use reqwest::redirect;
use std::time::Duration;

use crate::error::Result;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const REDIRECT_LIMIT: usize = 10;

/// Build the blocking client every probe request goes through.
///
/// One attempt per call, no cookie jar, no retries. The timeout covers the
/// whole request and is set once here, never per call.
pub(crate) fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
        .build()?)
}
