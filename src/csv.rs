// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

/// Write a single CSV row. Every field is quoted; embedded quotes are
/// doubled (unix dialect).
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
    }
    writeln!(w)
}

/// Full file contents for a dataset: header line (if any) then rows.
pub fn rows_to_string(headers: &Option<Vec<String>>, rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h);
    }
    for r in rows {
        let _ = write_row(&mut buf, r);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
