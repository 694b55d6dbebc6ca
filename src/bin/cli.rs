// src/bin/cli.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    pydoc_scrape::cli::run()
}
