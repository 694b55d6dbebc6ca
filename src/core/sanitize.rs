// src/core/sanitize.rs

/// Replace embedded newlines with single spaces, leaving all other
/// whitespace alone. Used to flatten multi-line landmark text (e.g. a
/// `<dl>` block) into one cell.
pub fn collapse_newlines(s: &str) -> String {
    s.replace('\n', " ")
}

/// Reduce a URL to a filesystem-safe cache-file stem.
/// Anything outside `[A-Za-z0-9._-]` becomes `_`, runs collapsed.
pub fn sanitize_cache_stem(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut last_us = false;
    for ch in url.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { "page".to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_newlines_keeps_other_ws() {
        assert_eq!(collapse_newlines("a\nb\nc"), "a b c");
        assert_eq!(collapse_newlines("a  b"), "a  b");
    }

    #[test]
    fn cache_stem_is_fs_safe() {
        let stem = sanitize_cache_stem("https://docs.python.org/3/whatsnew/");
        assert_eq!(stem, "https_docs.python.org_3_whatsnew");
        assert!(!stem.contains('/'));
        assert!(!stem.contains(':'));
    }

    #[test]
    fn cache_stem_never_empty() {
        assert_eq!(sanitize_cache_stem("///"), "page");
    }
}
