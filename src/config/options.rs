// src/config/options.rs
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Release-notes articles with title and editor/author metadata
    WhatsNew,
    /// Documentation links by version and release status
    LatestVersions,
    /// Fetch and save the packaged documentation archive
    Download,
}

impl Mode {
    /// Stem used for result filenames, e.g. `whats-new_<timestamp>.csv`.
    pub fn stem(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Boxed table on stdout
    Pretty,
    /// CSV file under results/
    File,
}
