// src/render/csv.rs
//
// Delimited (CSV/TSV) rendering. Rich cells are flattened to plain text:
// link labels inline, an image becomes its `src`. With `hyperlinks`, a cell
// that is exactly one link becomes `=HYPERLINK("url","label")`.
use std::io::{self, Write};

use crate::core::sanitize::formula_string;
use crate::extract::table::{Cell, Record, Table};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Flatten one cell for delimited output.
pub fn flatten_cell(cell: &Cell, hyperlinks: bool) -> String {
    match cell {
        Cell::Rich(rt) => {
            if let Some(src) = rt.single_image() {
                return s!(src);
            }
            match rt.single_link() {
                Some((label, href)) if hyperlinks && !href.is_empty() => {
                    format!("=HYPERLINK({},{})", formula_string(href), formula_string(label))
                }
                _ => rt.plain_text(),
            }
        }
        other => other.display(),
    }
}

pub fn flatten_record(record: &Record, hyperlinks: bool) -> Vec<String> {
    record.cells().iter().map(|c| flatten_cell(c, hyperlinks)).collect()
}

/// Create a full export string (Copy/Export) from a table.
/// - `include_headers`: whether to emit the header line
/// - `hyperlinks`: emit single-link cells as HYPERLINK formulas
/// - `sep`: field separator
pub fn to_export_string(table: &Table, include_headers: bool, hyperlinks: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &table.header_labels(), sep);
    }
    for r in table.records() {
        let _ = write_row(&mut buf, &flatten_record(r, hyperlinks), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
