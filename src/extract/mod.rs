// src/extract/mod.rs
//
// Record extractor entry points:
//   document → rows::select_rows → fields::CompiledSpec::extract_record
//            → table::Table (header + records, encounter order)
//
// Extraction itself never fails; only reading input files can.
pub mod fields;
pub mod normalize;
pub mod rows;
pub mod table;

use std::{error::Error, fs, path::{Path, PathBuf}};

use scraper::Html;

use crate::config::options::ExtractOptions;
use crate::progress::Progress;
use crate::specs::{self, CatalogSpec};

use fields::CompiledSpec;
use table::{Cell, Record, Table};

/// Header record for a catalog, with the image column when requested.
pub fn header_for(spec: &CatalogSpec, opts: &ExtractOptions) -> Record {
    let header = Record::new(spec.headers().map(|h| Cell::Text(s!(h))).collect());
    if opts.include_image {
        header.with_leading(Cell::Text(s!("Image")))
    } else {
        header
    }
}

/// Extract one parsed document into a table.
pub fn extract_document(doc: &Html, opts: &ExtractOptions) -> Table {
    let spec = CompiledSpec::new(specs::spec_for(opts.catalog));
    extract_document_with(&spec, doc, opts)
}

/// Parse and extract one HTML string.
pub fn extract_str(html: &str, opts: &ExtractOptions) -> Table {
    extract_document(&Html::parse_document(html), opts)
}

/// Extract with selectors compiled once by the caller.
pub fn extract_document_with(spec: &CompiledSpec, doc: &Html, opts: &ExtractOptions) -> Table {
    let mut table = Table::new(header_for(spec.spec, opts));

    for row in rows::select_rows(doc, spec, opts) {
        let record = spec.extract_record(row);
        let record = if opts.include_image {
            record.with_leading(spec.image_cell(row))
        } else {
            record
        };
        table.push(record);
    }

    if table.is_empty() {
        logd!("Extract: no {} rows found (markup changed, or empty catalog)", spec.spec.kind);
    }
    table
}

/// Extract several HTML strings (paginated catalog pages) under one header,
/// in input order.
pub fn assemble_many<'a, I>(pages: I, opts: &ExtractOptions) -> Table
where
    I: IntoIterator<Item = &'a str>,
{
    let spec = CompiledSpec::new(specs::spec_for(opts.catalog));
    let mut table = Table::new(header_for(spec.spec, opts));
    for html in pages {
        table.extend(extract_document_with(&spec, &Html::parse_document(html), opts));
    }
    table
}

/// Summary of a multi-file run.
pub struct RunSummary {
    pub table: Table,
    pub failed: Vec<(PathBuf, String)>,
}

/// Read and extract saved pages in order. Unreadable files are reported to
/// `progress`, logged, and listed in the summary; the rest still count.
pub fn extract_files(
    paths: &[PathBuf],
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let spec = CompiledSpec::new(specs::spec_for(opts.catalog));
    let mut table = Table::new(header_for(spec.spec, opts));
    let mut failed = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    for path in paths {
        let label = path.display().to_string();
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading {}", label));
        }
        match read_page(path) {
            Ok(html) => {
                let part = extract_document_with(&spec, &Html::parse_document(&html), opts);
                let n = part.row_count();
                table.extend(part);
                logf!("Extract: {} → {} row(s)", label, n);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label, n);
                }
            }
            Err(e) => {
                loge!("Extract: {}: {}", label, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&label, &e.to_string());
                }
                failed.push((path.clone(), e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    RunSummary { table, failed }
}

/// Saved pages are usually UTF-8; anything else is decoded lossily.
pub fn read_page(path: &Path) -> Result<String, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
