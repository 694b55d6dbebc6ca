// tests/output_modes.rs
//
// Tests for the output controller: plain lines, pretty table, file output.
//
use pydoc_scrape::config::options::Mode;
use pydoc_scrape::output::{plain_lines, render_pretty, write_results_file};
use pydoc_scrape::scrape::DataSet;

fn sample() -> DataSet {
    DataSet {
        headers: Some(vec![
            "Documentation link".to_string(),
            "Version".to_string(),
            "Status".to_string(),
        ]),
        rows: vec![
            vec!["/3.12/".to_string(), "3.12".to_string(), "stable".to_string()],
            vec!["/3.13/".to_string(), "3.13".to_string(), "in development".to_string()],
        ],
    }
}

#[test]
fn plain_prints_headers_then_rows_in_order() {
    let lines = plain_lines(&sample());
    assert_eq!(
        lines,
        vec![
            "Documentation link Version Status",
            "/3.12/ 3.12 stable",
            "/3.13/ 3.13 in development",
        ]
    );
}

#[test]
fn plain_without_headers_is_rows_only() {
    let mut ds = sample();
    ds.headers = None;
    assert_eq!(plain_lines(&ds).len(), 2);
}

#[test]
fn pretty_aligns_columns_and_boxes_them() {
    let out = render_pretty(&sample());
    let lines: Vec<&str> = out.lines().collect();

    // rule, header, rule, two rows, rule
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
    assert!(lines[1].contains("| Documentation link |"));
    assert!(lines[4].contains("| in development |"));

    // Every line has the same width once columns are sized.
    let width = lines[0].len();
    assert!(lines.iter().all(|l| l.len() == width), "ragged table:\n{out}");
}

#[test]
fn file_output_writes_timestamped_csv_under_results() {
    let dir = tempfile::tempdir().unwrap();
    let ds = sample();

    let path = write_results_file(&ds, Mode::LatestVersions, dir.path()).unwrap();
    assert!(path.starts_with(dir.path().join("results")));

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("latest-versions_"), "got {name}");
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("\"Documentation link\",\"Version\",\"Status\""));
    assert_eq!(lines.next(), Some("\"/3.12/\",\"3.12\",\"stable\""));
}

#[test]
fn file_output_creates_results_dir_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("nested");
    std::fs::create_dir(&base).unwrap();

    // results/ does not exist yet under base
    let path = write_results_file(&sample(), Mode::WhatsNew, &base).unwrap();
    assert!(path.exists());
}
