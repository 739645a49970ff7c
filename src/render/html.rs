// src/render/html.rs
//
// HTML table rendering for paste into spreadsheet software. Links and images
// survive as `<a>`/`<img>`; all text is escaped.
use std::fmt::Write;

use crate::config::consts::HTML_TABLE_WIDTH;
use crate::core::rich::{RichText, Segment};
use crate::core::sanitize::escape_html;
use crate::extract::table::{Cell, Record, Table};

pub fn rich_to_html(rt: &RichText) -> String {
    let mut out = String::new();
    for seg in rt.segments() {
        match seg {
            Segment::Text(t) => out.push_str(&escape_html(t)),
            Segment::Link { label, href } => {
                let _ = write!(out, "<a href=\"{}\">{}</a>", escape_html(href), escape_html(label));
            }
            Segment::Image { src, alt, width } => {
                let _ = write!(out, "<img src=\"{}\" alt=\"{}\"", escape_html(src), escape_html(alt));
                if let Some(w) = width {
                    let _ = write!(out, " width=\"{}\"", w);
                }
                out.push('>');
            }
        }
    }
    out
}

pub fn cell_to_html(cell: &Cell) -> String {
    match cell {
        Cell::Rich(rt) => rich_to_html(rt),
        other => escape_html(&other.display()),
    }
}

fn push_row(out: &mut String, record: &Record) {
    out.push_str("<tr>");
    for cell in record.cells() {
        out.push_str("<td>");
        out.push_str(&cell_to_html(cell));
        out.push_str("</td>");
    }
    out.push_str("</tr>\n");
}

/// `<table>` element only; the header row is a plain row like the rest.
pub fn render_table(table: &Table, include_headers: bool) -> String {
    let mut out = format!("<table border=\"1\" style=\"width: {}\">\n", HTML_TABLE_WIDTH);
    if include_headers {
        push_row(&mut out, table.header());
    }
    for r in table.records() {
        push_row(&mut out, r);
    }
    out.push_str("</table>\n");
    out
}

/// Standalone page around `render_table`.
pub fn render_document(table: &Table, include_headers: bool) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Export</title></head>\n<body>\n");
    out.push_str(&render_table(table, include_headers));
    out.push_str("</body>\n</html>\n");
    out
}
