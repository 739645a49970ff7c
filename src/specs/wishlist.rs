// src/specs/wishlist.rs
//
// Wishlist page: `<tr class="bc-table-row …">`. The same class sits on the
// table's own header row, hence `skip_header_row` for this catalog.
//   td 1: cover image
//   td 2: .bc-list-item 1 = title, 3 = length, 4 = "Released: 05-05-04"
//   td 3: first .bc-row = "By: …" author line
//   td 5: date added
use super::{CatalogSpec, FieldSpec, Normalizer, Source};
use crate::config::options::CatalogKind;

pub static SPEC: CatalogSpec = CatalogSpec {
    kind: CatalogKind::Wishlist,
    row_selector: r#"tr[class*="bc-table-row"]"#,
    placeholder: None,
    image_selector: "td:nth-of-type(1) img",
    fields: FIELDS,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        header: "Title",
        source: Source::Fragment("td:nth-of-type(2) .bc-list-item:nth-of-type(1)"),
    },
    FieldSpec {
        header: "Author",
        source: Source::Fragment("td:nth-of-type(3) .bc-row:nth-of-type(1)"),
    },
    FieldSpec {
        header: "Minutes",
        source: Source::Text(
            "td:nth-of-type(2) .bc-list-item:nth-of-type(3) .bc-text:nth-of-type(1)",
            Normalizer::Minutes,
        ),
    },
    FieldSpec {
        header: "Date Added",
        source: Source::Text("td:nth-of-type(5)", Normalizer::Verbatim),
    },
    FieldSpec {
        header: "Date Released",
        source: Source::Text(
            "td:nth-of-type(2) .bc-list-item:nth-of-type(4) .bc-text:nth-of-type(1)",
            Normalizer::DateToken,
        ),
    },
];
