// src/config/consts.rs

// Net config
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const WHATS_NEW_PATH: &str = "whatsnew/";
pub const DOWNLOADS_PATH: &str = "download.html";

// Local cache
pub const CACHE_DIR: &str = ".cache";

// Output
pub const DOWNLOADS_SUBDIR: &str = "downloads";
pub const RESULTS_SUBDIR: &str = "results";

// Sidebar marker for the version list
pub const ALL_VERSIONS_MARKER: &str = "All versions";
