// src/output.rs

// Output controller: renders a DataSet according to the selected mode.
// Plain print is the default; pretty draws a boxed table; file writes a
// timestamped CSV under results/.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::config::consts::RESULTS_SUBDIR;
use crate::config::options::{Mode, OutputMode};
use crate::csv;
use crate::error::ScrapeError;
use crate::scrape::DataSet;

pub fn control_output(
    ds: &DataSet,
    mode: Mode,
    output: Option<OutputMode>,
    base_dir: &Path,
) -> Result<(), ScrapeError> {
    match output {
        None => {
            for line in plain_lines(ds) {
                println!("{line}");
            }
        }
        Some(OutputMode::Pretty) => print!("{}", render_pretty(ds)),
        Some(OutputMode::File) => {
            let path = write_results_file(ds, mode, base_dir)?;
            info!("results saved: {}", path.display());
        }
    }
    Ok(())
}

/// Space-joined cells, header line first. Split out for tests.
pub fn plain_lines(ds: &DataSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(ds.rows.len() + 1);
    if let Some(h) = &ds.headers {
        lines.push(h.join(" "));
    }
    for row in &ds.rows {
        lines.push(row.join(" "));
    }
    lines
}

/// Boxed table with `+---+` rules between header and body.
pub fn render_pretty(ds: &DataSet) -> String {
    let widths = column_widths(ds);
    let mut out = String::new();

    rule(&mut out, &widths);
    if let Some(h) = &ds.headers {
        line(&mut out, h, &widths);
        rule(&mut out, &widths);
    }
    for row in &ds.rows {
        line(&mut out, row, &widths);
    }
    rule(&mut out, &widths);
    out
}

/// Timestamped CSV under `<base_dir>/results/`, named after the mode.
pub fn write_results_file(
    ds: &DataSet,
    mode: Mode,
    base_dir: &Path,
) -> Result<PathBuf, ScrapeError> {
    let dir = base_dir.join(RESULTS_SUBDIR);
    fs::create_dir_all(&dir)?;

    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("{}_{stamp}.csv", mode.stem()));
    fs::write(&path, csv::rows_to_string(&ds.headers, &ds.rows))?;
    Ok(path)
}

/* ---------------- helpers ---------------- */

fn column_widths(ds: &DataSet) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    let mut take = |row: &[String]| {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            if i == widths.len() {
                widths.push(w);
            } else if w > widths[i] {
                widths[i] = w;
            }
        }
    };
    if let Some(h) = &ds.headers {
        take(h);
    }
    for row in &ds.rows {
        take(row);
    }
    widths
}

fn rule(out: &mut String, widths: &[usize]) {
    for w in widths {
        out.push('+');
        out.push_str(&"-".repeat(w + 2));
    }
    out.push_str("+\n");
}

fn line(out: &mut String, row: &[String], widths: &[usize]) {
    for (i, w) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let pad = w.saturating_sub(cell.chars().count());
        out.push_str("| ");
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        out.push(' ');
    }
    out.push_str("|\n");
}
