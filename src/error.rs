// src/error.rs
use thiserror::Error;

/// Error kinds for a scrape run.
///
/// A pattern mismatch on an anchor text is deliberately *not* represented
/// here: it falls back to a per-field default and never aborts (see
/// `scrape::latest_versions`).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or HTTP-status failure for one URL. Recoverable by skipping
    /// the item in iterative extractors; fatal for a required top-level page.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// Expected HTML structure absent. Fatal for the current extractor.
    #[error("landmark not found: <{tag}> {detail}")]
    LandmarkNotFound { tag: &'static str, detail: String },

    #[error("bad url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
