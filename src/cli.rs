// src/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::options::{Mode, OutputMode};
use crate::core::fetch::Client;
use crate::output;
use crate::progress::Progress;
use crate::scrape::{self, DataSet};
use crate::store;

/// Scraper for the Python documentation site.
#[derive(Debug, Parser)]
#[command(name = "pydoc_scrape", version, about)]
pub struct Args {
    /// What to extract
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the response cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// How to render results (default: plain print)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputMode>,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("scraper started");
    let args = Args::parse();
    info!(?args, "command line arguments");

    if args.clear_cache {
        store::clear()?;
        info!("response cache cleared");
    }

    let client = Client::new();
    let base_dir = std::env::current_dir()?;

    let results: Option<DataSet> = match args.mode {
        Mode::WhatsNew => {
            let mut bar = CliProgress::default();
            Some(scrape::collect_whats_new(&client, Some(&mut bar))?)
        }
        Mode::LatestVersions => Some(scrape::collect_latest_versions(&client, None)?),
        Mode::Download => {
            let path = scrape::download_archive(&client, &base_dir, None)?;
            println!("Archive saved to {}", path.display());
            None
        }
    };

    if let Some(ds) = results {
        output::control_output(&ds, args.mode, args.output, &base_dir)?;
    }

    info!("scraper finished");
    Ok(())
}

/* ---------------- CLI progress ---------------- */

/// Progress bar over the what's-new iteration. Skipped items still advance
/// the bar so the count always reaches the total.
#[derive(Default)]
struct CliProgress {
    bar: Option<ProgressBar>,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        self.bar = Some(bar);
    }

    fn log(&mut self, msg: &str) {
        if let Some(b) = &self.bar {
            b.println(msg);
        }
    }

    fn item_done(&mut self, label: &str) {
        if let Some(b) = &self.bar {
            b.set_message(label.to_string());
            b.inc(1);
        }
    }

    fn item_skipped(&mut self, label: &str) {
        if let Some(b) = &self.bar {
            b.println(format!("skipped {label}"));
            b.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(b) = &self.bar {
            b.finish_and_clear();
        }
    }
}
