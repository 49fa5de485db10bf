use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::consts;

/// Fixed header set carried by every probe request.
pub(crate) fn probe_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
    headers
}
