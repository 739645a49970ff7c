// src/extract/rows.rs
//
// Row selector: every element matching the catalog's row query, in document
// order, minus a leading header row (when asked) and minus show placeholders
// (unless asked to keep them).
use scraper::{ElementRef, Html};

use crate::config::options::ExtractOptions;

use super::fields::CompiledSpec;

pub fn select_rows<'a>(doc: &'a Html, spec: &CompiledSpec, opts: &ExtractOptions) -> Vec<ElementRef<'a>> {
    let Some(sel) = spec.rows.as_ref() else {
        return Vec::new();
    };

    let skip = if opts.skip_header_row { 1 } else { 0 };
    let mut placeholders = 0usize;

    let rows: Vec<ElementRef<'a>> = doc
        .select(sel)
        .skip(skip)
        .filter(|row| {
            if opts.include_shows || !spec.is_placeholder(*row) {
                return true;
            }
            placeholders += 1;
            false
        })
        .collect();

    if placeholders > 0 {
        logd!("Rows: skipped {} show placeholder(s)", placeholders);
    }
    rows
}
