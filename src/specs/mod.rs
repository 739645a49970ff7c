// src/specs/mod.rs
//! # Catalog "specs" module
//!
//! Each spec describes **where the fields live** in one saved catalog page and
//! **how to normalize them**, as data rather than code. The extractor
//! (`extract::fields`) walks a spec's field table row by row; nothing in here
//! touches the DOM.
//!
//! ## Shape
//! - `row_selector`: CSS query matching every catalog row (`tr[class*=…]`).
//! - `placeholder`: optional rule marking "series/show" rows
//!   (a nested label such as "View all episodes").
//! - `image_selector`: thumbnail used when the image column is requested.
//! - `fields`: ordered `header → source → normalizer` table. Column order in
//!   the output table is the order of this slice.
//!
//! ## Conventions & invariants
//! - Paths are **positional + structural** (`td:nth-of-type(n) .bc-…`), exactly
//!   as the upstream markup nests them. When the site changes its markup,
//!   these strings are the only thing that needs updating.
//! - Sources never fail: a missing element yields the field's absent value.
//!
//! ## Current specs
//! - `library` – purchased titles, with ratings and time left.
//! - `wishlist` – saved titles, with date added and release date.
pub mod library;
pub mod wishlist;

use crate::config::options::CatalogKind;

/// How a text source is turned into a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Normalizer {
    /// Whitespace-normalized text.
    Verbatim,
    /// `parse_duration`.
    Minutes,
    /// `parse_date_token`.
    DateToken,
    /// Trim, take the first line, then `parse_duration`.
    FirstLineMinutes,
}

/// Where a field's value comes from, relative to the row element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Contents of the first match, formatting and links kept.
    Fragment(&'static str),
    /// Linked names: several collapse into one search link, one passes through.
    Contributor { links: &'static str, list: &'static str },
    /// Text of the first match through a normalizer.
    Text(&'static str, Normalizer),
    /// Numeric attribute on the n-th (0-based) element carrying it.
    StarCount(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub header: &'static str,
    pub source: Source,
}

/// Marks a row as a multi-episode show placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderRule {
    pub selector: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct CatalogSpec {
    pub kind: CatalogKind,
    pub row_selector: &'static str,
    pub placeholder: Option<PlaceholderRule>,
    pub image_selector: &'static str,
    pub fields: &'static [FieldSpec],
}

impl CatalogSpec {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.header)
    }
}

pub fn spec_for(kind: CatalogKind) -> &'static CatalogSpec {
    match kind {
        CatalogKind::Library => &library::SPEC,
        CatalogKind::Wishlist => &wishlist::SPEC,
    }
}
