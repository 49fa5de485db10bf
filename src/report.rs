//! Report
//!
//! Transcript rendering. The probes return typed outcomes; every line the
//! CLI prints is assembled here, so the exact wording lives in one place.

use std::fmt::Write;

use crate::api::PageProbe;
use crate::consts;
use crate::endpoints::EndpointOutcome;
use crate::error::ProbeError;

/// Render the page-probe transcript: status, candidate count, and a short
/// preview of the first candidates.
pub fn render_page(probe: &PageProbe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status Code: {}", probe.status_code);
    let _ = writeln!(
        out,
        "Found {} elements with '{}' class.",
        probe.scan.count(),
        consts::CLASS_KEYWORD
    );

    for candidate in probe.scan.candidates.iter().take(consts::PREVIEW_LIMIT) {
        let _ = writeln!(out, "---");
        let _ = writeln!(
            out,
            "Title: {}",
            candidate.title.as_deref().unwrap_or(consts::NO_TITLE)
        );
        let _ = writeln!(
            out,
            "HTML Preview: {}",
            truncate_chars(&candidate.markup, consts::PREVIEW_CHARS)
        );
    }

    out
}

/// Render the endpoint-chain transcript for whichever rung answered.
pub fn render_endpoints(outcome: &EndpointOutcome) -> String {
    let mut out = String::new();
    match outcome {
        EndpointOutcome::WpJson { count, first_title } => {
            let _ = writeln!(out, "Found {} post types via JSON API (tribe_events).", count);
            if let Some(title) = first_title {
                let _ = writeln!(out, "{}", title);
            }
        }
        EndpointOutcome::TecApi { count } => {
            let _ = writeln!(out, "tribe_events failed.");
            let _ = writeln!(out, "Found {} events via TEC API.", count);
        }
        EndpointOutcome::Feed { body } => {
            let _ = writeln!(out, "tribe_events failed.");
            let _ = writeln!(
                out,
                "RSS Feed content: {}",
                truncate_chars(body, consts::FEED_PREVIEW_CHARS)
            );
        }
    }
    out
}

/// Render a failed run. One line, nothing else.
pub fn render_error(err: &ProbeError) -> String {
    format!("Error: {}\n", err)
}

/// First `max` characters of `s`. Counts chars, not bytes, so multibyte
/// text never splits mid-character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
