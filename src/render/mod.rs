// src/render/mod.rs
//
// Renderers: turn an assembled `Table` into text for a spreadsheet.
// Rows come out in table order, one output cell per record field.
pub mod csv;
pub mod html;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::extract::table::Table;

/// Render according to the export options (format, headers, hyperlinks).
pub fn render(table: &Table, export: &ExportOptions) -> String {
    match export.format.delimiter() {
        None => html::render_table(table, export.include_headers),
        Some(sep) => csv::to_export_string(table, export.include_headers, export.hyperlinks, sep),
    }
}

/// Like `render`, but HTML output is a complete standalone page.
pub fn render_file(table: &Table, export: &ExportOptions) -> String {
    match export.format {
        ExportFormat::Html => html::render_document(table, export.include_headers),
        _ => render(table, export),
    }
}
