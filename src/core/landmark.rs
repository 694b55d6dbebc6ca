// src/core/landmark.rs
//! Landmark location over a parsed HTML tree.
//!
//! A landmark is a uniquely identifiable structural location (tag name plus
//! attribute constraints) used as an anchor for extracting nearby data.
//! The site's pages vary in shape, so everything here matches in document
//! order and keeps the constraint language small: exact attribute value,
//! class-token membership, or a regex over the attribute value (used for
//! the `.zip` download link).
//!
//! `find` fails loudly: a missing landmark means the rest of the extraction
//! cannot proceed, and the error names the tag and constraints attempted.

use regex::Regex;
use scraper::ElementRef;

use crate::error::ScrapeError;

/// How an attribute value must relate to the constraint.
pub enum AttrValue<'a> {
    /// Exact match; for the `class` attribute this matches any
    /// whitespace-separated class token (class lists are multi-valued).
    Exact(&'a str),
    /// Regex match against the raw attribute value.
    Matches(&'a Regex),
}

/// One attribute constraint, e.g. `id="what-s-new-in-python"`.
pub struct Constraint<'a> {
    pub name: &'a str,
    pub value: AttrValue<'a>,
}

impl<'a> Constraint<'a> {
    pub fn exact(name: &'a str, value: &'a str) -> Self {
        Self { name, value: AttrValue::Exact(value) }
    }
    pub fn matches(name: &'a str, pattern: &'a Regex) -> Self {
        Self { name, value: AttrValue::Matches(pattern) }
    }
}

/// First element under `scope` (document order, `scope` included) with the
/// given tag satisfying all constraints.
pub fn find<'a>(
    scope: ElementRef<'a>,
    tag: &'static str,
    constraints: &[Constraint],
) -> Result<ElementRef<'a>, ScrapeError> {
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| matches(*el, tag, constraints))
        .ok_or_else(|| ScrapeError::LandmarkNotFound { tag, detail: describe(constraints) })
}

/// All matching elements under `scope`, in document order. Absence is not
/// an error here; callers decide what an empty set means.
pub fn find_all<'a>(
    scope: ElementRef<'a>,
    tag: &'static str,
    constraints: &[Constraint],
) -> Vec<ElementRef<'a>> {
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches(*el, tag, constraints))
        .collect()
}

/// Required attribute on an already-located element.
pub fn require_attr<'a>(
    el: ElementRef<'a>,
    tag: &'static str,
    name: &str,
) -> Result<&'a str, ScrapeError> {
    el.value().attr(name).ok_or_else(|| ScrapeError::LandmarkNotFound {
        tag,
        detail: format!("missing attribute {name}"),
    })
}

/// Flattened text content of an element, concatenated in document order.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn matches(el: ElementRef<'_>, tag: &str, constraints: &[Constraint]) -> bool {
    if el.value().name() != tag {
        return false;
    }
    constraints.iter().all(|c| match el.value().attr(c.name) {
        None => false,
        Some(actual) => match &c.value {
            AttrValue::Exact(want) if c.name == "class" => {
                actual.split_whitespace().any(|token| token == *want)
            }
            AttrValue::Exact(want) => actual == *want,
            AttrValue::Matches(re) => re.is_match(actual),
        },
    })
}

fn describe(constraints: &[Constraint]) -> String {
    if constraints.is_empty() {
        return "(no attribute constraints)".to_string();
    }
    constraints
        .iter()
        .map(|c| match &c.value {
            AttrValue::Exact(v) => format!("{}=\"{}\"", c.name, v),
            AttrValue::Matches(re) => format!("{}~/{}/", c.name, re.as_str()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
