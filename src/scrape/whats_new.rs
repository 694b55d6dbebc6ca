// src/scrape/whats_new.rs

use scraper::Html;
use tracing::warn;
use url::Url;

use crate::config::consts::{MAIN_DOC_URL, WHATS_NEW_PATH};
use crate::core::fetch::Fetch;
use crate::core::landmark::{self, Constraint};
use crate::core::sanitize::collapse_newlines;
use crate::error::ScrapeError;
use crate::progress::Progress;

use super::DataSet;

const HEADERS: [&str; 3] = ["Article link", "Title", "Editor, author"];

/// Walk the what's-new index and collect one row per reachable
/// release-notes page: absolute link, `<h1>` title, flattened `<dl>` text.
///
/// A failed fetch of one article page degrades the result (that item is
/// skipped); a missing landmark on the index or on a fetched page is fatal.
pub fn collect_whats_new(
    fetch: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, ScrapeError> {
    let whats_new_url = Url::parse(MAIN_DOC_URL)?.join(WHATS_NEW_PATH)?;
    let body = fetch.get_text(&whats_new_url)?;
    let doc = Html::parse_document(&body);
    let links = index_links(&doc, &whats_new_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut rows = Vec::with_capacity(links.len());
    for link in links {
        let body = match fetch.get_text(&link) {
            Ok(b) => b,
            Err(e) => {
                warn!("skipping {link}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(link.as_str());
                }
                continue;
            }
        };
        let page = Html::parse_document(&body);
        rows.push(article_row(&page, &link)?);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(link.as_str());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(DataSet { headers: Some(HEADERS.iter().map(|h| h.to_string()).collect()), rows })
}

/* ---------------- parsing ---------------- */

/// Per-version article links from the index, in listing order:
/// `section#what-s-new-in-python` → `div.toctree-wrapper` → `li.toctree-l1`.
fn index_links(doc: &Html, index_url: &Url) -> Result<Vec<Url>, ScrapeError> {
    let section = landmark::find(
        doc.root_element(),
        "section",
        &[Constraint::exact("id", "what-s-new-in-python")],
    )?;
    let wrapper = landmark::find(section, "div", &[Constraint::exact("class", "toctree-wrapper")])?;
    let items = landmark::find_all(wrapper, "li", &[Constraint::exact("class", "toctree-l1")]);

    let mut links = Vec::with_capacity(items.len());
    for item in items {
        let a = landmark::find(item, "a", &[])?;
        let href = landmark::require_attr(a, "a", "href")?;
        links.push(index_url.join(href)?);
    }
    Ok(links)
}

/// One row from a release-notes page. The title is the first `<h1>`'s text
/// verbatim; the detail is the first `<dl>`'s text with newlines collapsed.
fn article_row(page: &Html, link: &Url) -> Result<Vec<String>, ScrapeError> {
    let h1 = landmark::find(page.root_element(), "h1", &[])?;
    let dl = landmark::find(page.root_element(), "dl", &[])?;
    Ok(vec![
        link.to_string(),
        landmark::text_of(h1),
        collapse_newlines(&landmark::text_of(dl)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const INDEX_URL: &str = "https://docs.python.org/3/whatsnew/";

    fn index_doc() -> String {
        r#"
            <html><body>
              <section id="what-s-new-in-python">
                <div class="toctree-wrapper compound">
                  <ul>
                    <li class="toctree-l1"><a href="3.12.html">What's New In Python 3.12</a></li>
                    <li class="toctree-l1"><a href="3.11.html">What's New In Python 3.11</a></li>
                    <li class="toctree-l1"><a href="3.10.html">What's New In Python 3.10</a></li>
                  </ul>
                </div>
              </section>
            </body></html>
        "#
        .to_string()
    }

    fn article_doc(version: &str) -> String {
        format!(
            r#"
                <html><body>
                  <h1>What's New In Python {version}</h1>
                  <dl class="field-list">
                    <dt>Editor</dt>
                    <dd>Some Editor</dd>
                  </dl>
                </body></html>
            "#
        )
    }

    struct CannedPages(HashMap<String, String>);

    impl CannedPages {
        fn new(pages: &[(&str, String)]) -> Self {
            Self(pages.iter().map(|(u, b)| (u.to_string(), b.clone())).collect())
        }
    }

    impl Fetch for CannedPages {
        fn get_text(&self, url: &Url) -> Result<String, ScrapeError> {
            self.0.get(url.as_str()).cloned().ok_or_else(|| ScrapeError::FetchFailed {
                url: url.to_string(),
                reason: "unreachable".to_string(),
            })
        }
        fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
            self.get_text(url).map(String::into_bytes)
        }
    }

    #[test]
    fn index_links_in_listing_order() {
        let doc = Html::parse_document(&index_doc());
        let base = Url::parse(INDEX_URL).unwrap();
        let links = index_links(&doc, &base).unwrap();
        let links: Vec<String> = links.into_iter().map(|u| u.to_string()).collect();
        assert_eq!(
            links,
            vec![
                "https://docs.python.org/3/whatsnew/3.12.html",
                "https://docs.python.org/3/whatsnew/3.11.html",
                "https://docs.python.org/3/whatsnew/3.10.html",
            ]
        );
    }

    #[test]
    fn index_without_section_is_fatal() {
        let doc = Html::parse_document("<html><body><p>empty</p></body></html>");
        let base = Url::parse(INDEX_URL).unwrap();
        let err = index_links(&doc, &base).unwrap_err();
        assert!(matches!(err, ScrapeError::LandmarkNotFound { tag: "section", .. }));
    }

    #[test]
    fn article_row_collapses_dl_newlines() {
        let page = Html::parse_document(&article_doc("3.11"));
        let link = Url::parse("https://docs.python.org/3/whatsnew/3.11.html").unwrap();
        let row = article_row(&page, &link).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[1], "What's New In Python 3.11");
        assert!(!row[2].contains('\n'), "detail still has newlines: {:?}", row[2]);
        assert!(row[2].contains("Editor"));
    }

    #[test]
    fn unreachable_article_is_skipped_not_fatal() {
        // Three listed versions, the middle page unreachable: two rows,
        // index order preserved.
        let fetch = CannedPages::new(&[
            (INDEX_URL, index_doc()),
            ("https://docs.python.org/3/whatsnew/3.12.html", article_doc("3.12")),
            ("https://docs.python.org/3/whatsnew/3.10.html", article_doc("3.10")),
        ]);

        let ds = collect_whats_new(&fetch, None).unwrap();
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[0][0], "https://docs.python.org/3/whatsnew/3.12.html");
        assert_eq!(ds.rows[1][0], "https://docs.python.org/3/whatsnew/3.10.html");
        for row in &ds.rows {
            assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn headers_are_fixed_three_columns() {
        let fetch = CannedPages::new(&[(INDEX_URL, index_doc())]);
        // All article pages unreachable: zero rows, headers still present.
        let ds = collect_whats_new(&fetch, None).unwrap();
        assert_eq!(
            ds.headers.as_deref(),
            Some(&["Article link".to_string(), "Title".to_string(), "Editor, author".to_string()][..])
        );
        assert!(ds.rows.is_empty());
    }

    #[test]
    fn unreachable_index_is_fatal() {
        let fetch = CannedPages::new(&[]);
        let err = collect_whats_new(&fetch, None).unwrap_err();
        assert!(matches!(err, ScrapeError::FetchFailed { .. }));
    }
}
