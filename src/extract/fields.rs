// src/extract/fields.rs
//
// Field extractor: evaluates a catalog's declarative field table against one
// row element. Selectors are compiled once per run (`CompiledSpec`).
use scraper::{ElementRef, Selector};

use crate::config::consts::{IMAGE_WIDTH, SEARCH_AUTHOR_PATH, STAR_COUNT_ATTR};
use crate::core::dom::{self, compile};
use crate::core::rich::RichText;
use crate::core::sanitize::normalize_ws;
use crate::specs::{CatalogSpec, Normalizer, PlaceholderRule, Source};

use super::normalize::{parse_date_token, parse_duration, parse_first_line_duration, parse_star_count};
use super::table::{Cell, Record};

enum CompiledSource {
    Fragment(Option<Selector>),
    Contributor { links: Option<Selector>, list: Option<Selector> },
    Text(Option<Selector>, Normalizer),
    StarCount(usize),
}

pub struct CompiledSpec {
    pub spec: &'static CatalogSpec,
    pub(crate) rows: Option<Selector>,
    pub(crate) placeholder: Option<(Selector, &'static str)>,
    image: Option<Selector>,
    stars: Option<Selector>,
    fields: Vec<CompiledSource>,
}

impl CompiledSpec {
    pub fn new(spec: &'static CatalogSpec) -> Self {
        let fields = spec
            .fields
            .iter()
            .map(|f| match f.source {
                Source::Fragment(css) => CompiledSource::Fragment(compile(css)),
                Source::Contributor { links, list } => CompiledSource::Contributor {
                    links: compile(links),
                    list: compile(list),
                },
                Source::Text(css, norm) => CompiledSource::Text(compile(css), norm),
                Source::StarCount(n) => CompiledSource::StarCount(n),
            })
            .collect();

        Self {
            spec,
            rows: compile(spec.row_selector),
            placeholder: spec
                .placeholder
                .and_then(|PlaceholderRule { selector, label }| compile(selector).map(|s| (s, label))),
            image: compile(spec.image_selector),
            stars: compile(&format!("[{}]", STAR_COUNT_ATTR)),
            fields,
        }
    }

    /// One record per row, in field-table order. Never fails.
    pub fn extract_record(&self, row: ElementRef<'_>) -> Record {
        let cells = self.fields.iter().map(|src| self.extract_cell(row, src)).collect();
        Record::new(cells)
    }

    fn extract_cell(&self, row: ElementRef<'_>, source: &CompiledSource) -> Cell {
        match source {
            CompiledSource::Fragment(sel) => Cell::Rich(
                sel.as_ref()
                    .map(|s| dom::fragment_all(row, s))
                    .unwrap_or_default(),
            ),
            CompiledSource::Contributor { links, list } => {
                Cell::Rich(contributor(row, links.as_ref(), list.as_ref()))
            }
            CompiledSource::Text(sel, norm) => {
                let raw = sel
                    .as_ref()
                    .and_then(|s| dom::first(row, s))
                    .map(dom::text_of)
                    .unwrap_or_default();
                normalize_text(&raw, *norm)
            }
            CompiledSource::StarCount(n) => Cell::Rating(self.star_count(row, *n)),
        }
    }

    fn star_count(&self, row: ElementRef<'_>, n: usize) -> f32 {
        let raw = self
            .stars
            .as_ref()
            .and_then(|s| row.select(s).nth(n))
            .and_then(|el| dom::attr(el, STAR_COUNT_ATTR));
        parse_star_count(raw)
    }

    /// Thumbnail cell with the display width forced; empty when absent.
    pub fn image_cell(&self, row: ElementRef<'_>) -> Cell {
        let mut rt = RichText::new();
        if let Some(img) = self.image.as_ref().and_then(|s| dom::first(row, s)) {
            rt.push(dom::image_segment(img, Some(IMAGE_WIDTH)));
        }
        Cell::Rich(rt)
    }

    /// Whether the row is a series/show placeholder.
    pub fn is_placeholder(&self, row: ElementRef<'_>) -> bool {
        match &self.placeholder {
            Some((sel, label)) => dom::first(row, sel)
                .map(|el| dom::text_of(el).trim() == *label)
                .unwrap_or(false),
            None => false,
        }
    }
}

fn normalize_text(raw: &str, norm: Normalizer) -> Cell {
    match norm {
        Normalizer::Verbatim => Cell::Text(normalize_ws(raw)),
        Normalizer::Minutes => Cell::Minutes(parse_duration(raw)),
        Normalizer::DateToken => Cell::Date(parse_date_token(raw)),
        Normalizer::FirstLineMinutes => Cell::Minutes(parse_first_line_duration(raw)),
    }
}

/// Several linked names collapse into one link labeled with the normalized
/// text of every list match, pointing at an author search for that text. A single
/// link passes through unchanged; no links yields an empty value.
pub fn contributor(row: ElementRef<'_>, links: Option<&Selector>, list: Option<&Selector>) -> RichText {
    let found: Vec<ElementRef<'_>> = match links {
        Some(sel) => row.select(sel).collect(),
        None => Vec::new(),
    };

    match found.as_slice() {
        [] => RichText::new(),
        [one] => RichText::link(
            normalize_ws(&dom::text_of(*one)),
            dom::attr(*one, "href").unwrap_or(""),
        ),
        [..] => {
            let text = list.map(|sel| dom::all_text(row, sel)).unwrap_or_default();
            let label = if text.is_empty() {
                found.iter().map(|a| normalize_ws(&dom::text_of(*a))).collect::<Vec<_>>().join(" ")
            } else {
                text
            };
            let href = join!(SEARCH_AUTHOR_PATH, &urlencoding::encode(&label));
            RichText::link(label, href)
        }
    }
}
