// src/core/fetch.rs

// HTTP GET with an on-disk response cache. The capability is passed
// explicitly into each extractor; nothing here is global.

use std::time::Duration;

use url::Url;

use crate::error::ScrapeError;
use crate::store;

/// Transport capability. Extractors take `&dyn Fetch` so tests can swap in
/// canned pages without a network.
pub trait Fetch {
    /// GET a page and decode it as UTF-8 (lossy).
    fn get_text(&self, url: &Url) -> Result<String, ScrapeError>;
    /// GET an opaque byte stream (the archive download).
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ScrapeError>;
}

/// Blocking client; caches every successful response body in the store.
pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("pydoc_scrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self { http }
    }

    fn fetch(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        if let Some(body) = store::load(url.as_str()) {
            return Ok(body);
        }
        let resp = self
            .http
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_failed(url, &e))?;
        let body = resp.bytes().map_err(|e| fetch_failed(url, &e))?.to_vec();
        store::save(url.as_str(), &body);
        Ok(body)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for Client {
    fn get_text(&self, url: &Url) -> Result<String, ScrapeError> {
        Ok(String::from_utf8_lossy(&self.fetch(url)?).into_owned())
    }

    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        self.fetch(url)
    }
}

fn fetch_failed(url: &Url, e: &reqwest::Error) -> ScrapeError {
    ScrapeError::FetchFailed { url: url.to_string(), reason: e.to_string() }
}
