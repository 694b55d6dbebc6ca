// src/scrape/latest_versions.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::config::consts::{ALL_VERSIONS_MARKER, MAIN_DOC_URL};
use crate::core::fetch::Fetch;
use crate::core::landmark::{self, Constraint};
use crate::error::ScrapeError;
use crate::progress::Progress;

use super::DataSet;

const HEADERS: [&str; 3] = ["Documentation link", "Version", "Status"];

static VERSION_STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d+\.\d+) \((?P<status>.*)\)").expect("version pattern compiles")
});

/// One row per entry of the sidebar's "All versions" list:
/// documentation link, version, release status.
pub fn collect_latest_versions(
    fetch: &dyn Fetch,
    _progress: Option<&mut dyn Progress>,
) -> Result<DataSet, ScrapeError> {
    let main_url = Url::parse(MAIN_DOC_URL)?;
    let body = fetch.get_text(&main_url)?;
    let doc = Html::parse_document(&body);
    Ok(DataSet {
        headers: Some(HEADERS.iter().map(|h| h.to_string()).collect()),
        rows: parse_sidebar(&doc)?,
    })
}

/* ---------------- parsing ---------------- */

/// Scan the sidebar's sublists for the one whose text carries the
/// "All versions" marker. Non-matching sublists are passed over; only
/// exhausting the whole sequence without a match is an error.
fn parse_sidebar(doc: &Html) -> Result<Vec<Vec<String>>, ScrapeError> {
    let sidebar = landmark::find(
        doc.root_element(),
        "div",
        &[Constraint::exact("class", "sphinxsidebarwrapper")],
    )?;

    let mut anchors = None;
    for ul in landmark::find_all(sidebar, "ul", &[]) {
        if landmark::text_of(ul).contains(ALL_VERSIONS_MARKER) {
            anchors = Some(landmark::find_all(ul, "a", &[]));
            break;
        }
    }
    let anchors = anchors.ok_or_else(|| ScrapeError::LandmarkNotFound {
        tag: "ul",
        detail: format!("containing \"{ALL_VERSIONS_MARKER}\" in div.sphinxsidebarwrapper"),
    })?;

    let mut rows = Vec::with_capacity(anchors.len());
    for a in anchors {
        let href = landmark::require_attr(a, "a", "href")?;
        let (version, status) = split_version_status(&landmark::text_of(a));
        rows.push(vec![href.to_string(), version, status]);
    }
    Ok(rows)
}

/// `Python X.Y (status)` → the captured groups. Anything else falls back
/// to the raw anchor text with an empty status; a mismatch never aborts.
fn split_version_status(text: &str) -> (String, String) {
    match VERSION_STATUS_RE.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}
