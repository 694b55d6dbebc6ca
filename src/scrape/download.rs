// src/scrape/download.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::info;
use url::Url;

use crate::config::consts::{DOWNLOADS_PATH, DOWNLOADS_SUBDIR, MAIN_DOC_URL};
use crate::core::fetch::Fetch;
use crate::core::landmark::{self, Constraint};
use crate::error::ScrapeError;
use crate::progress::Progress;

static ZIP_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+\.zip$").expect("zip pattern compiles"));

/// Locate the packaged-docs archive on the downloads page, fetch it and
/// save it under `<base_dir>/downloads/`. The filename is the final path
/// segment of the resolved archive URL; an existing file is overwritten.
///
/// The result of this extractor is the side effect; the written path is
/// returned for reporting and tests only.
pub fn download_archive(
    fetch: &dyn Fetch,
    base_dir: &Path,
    _progress: Option<&mut dyn Progress>,
) -> Result<PathBuf, ScrapeError> {
    let downloads_url = Url::parse(MAIN_DOC_URL)?.join(DOWNLOADS_PATH)?;
    let body = fetch.get_text(&downloads_url)?;
    let doc = Html::parse_document(&body);
    let archive_url = archive_link(&doc, &downloads_url)?;

    // The href matched `.+\.zip$`, so the path has a non-empty last segment.
    let filename = archive_url.path().rsplit('/').next().unwrap_or_default().to_string();

    let downloads_dir = base_dir.join(DOWNLOADS_SUBDIR);
    fs::create_dir_all(&downloads_dir)?;
    let archive_path = downloads_dir.join(&filename);

    let bytes = fetch.get_bytes(&archive_url)?;
    fs::write(&archive_path, bytes)?;

    info!("archive saved: {}", archive_path.display());
    Ok(archive_path)
}

/// First `.zip` link inside the docutils table, resolved absolute against
/// the downloads page.
fn archive_link(doc: &Html, page_url: &Url) -> Result<Url, ScrapeError> {
    let table = landmark::find(
        doc.root_element(),
        "table",
        &[Constraint::exact("class", "docutils")],
    )?;
    let a = landmark::find(table, "a", &[Constraint::matches("href", &ZIP_HREF_RE)])?;
    let href = landmark::require_attr(a, "a", "href")?;
    Ok(page_url.join(href)?)
}
