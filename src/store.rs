// src/store.rs

// On-disk HTTP response cache under `.cache/`, keyed by URL.
// Saves are best-effort: a failed write never fails the scrape.

use std::{
    fs, io,
    hash::{DefaultHasher, Hash, Hasher},
    path::PathBuf,
};

use crate::config::consts::CACHE_DIR;
use crate::core::sanitize::sanitize_cache_stem;

/// Cache file for a URL: readable stem + hash suffix so that distinct URLs
/// sanitizing to the same stem never collide.
pub fn cache_path(url: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    let name = format!("{}-{:016x}.body", sanitize_cache_stem(url), hasher.finish());
    PathBuf::from(CACHE_DIR).join(name)
}

pub fn load(url: &str) -> Option<Vec<u8>> {
    fs::read(cache_path(url)).ok()
}

/// Best-effort: IO errors are swallowed, the response is simply not cached.
pub fn save(url: &str, body: &[u8]) {
    if fs::create_dir_all(CACHE_DIR).is_ok() {
        let _ = fs::write(cache_path(url), body);
    }
}

/// Remove the whole cache directory. Missing directory is not an error.
pub fn clear() -> io::Result<()> {
    match fs::remove_dir_all(CACHE_DIR) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
