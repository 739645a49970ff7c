// src/specs/library.rs
//
// Library page: `<tr class="adbl-library-row …">`, one per purchased title.
//   td 1: cover image + progress block (3rd .bc-row = "3h 2m left")
//   td 2: title list (.bc-list-item 1 = title, 2 = "View all episodes" on shows)
//   td 3: author list (.bc-list a)
//   td 4: length   td 5: purchase date
//   anywhere: [data-star-count] × 3 = overall, performance, story
use super::{CatalogSpec, FieldSpec, Normalizer, PlaceholderRule, Source};
use crate::config::consts::PLACEHOLDER_LABEL;
use crate::config::options::CatalogKind;

pub static SPEC: CatalogSpec = CatalogSpec {
    kind: CatalogKind::Library,
    row_selector: r#"tr[class*="adbl-library-row"]"#,
    placeholder: Some(PlaceholderRule {
        selector: "td:nth-of-type(2) .bc-list-item:nth-of-type(2)",
        label: PLACEHOLDER_LABEL,
    }),
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
        source: Source::Contributor {
            links: "td:nth-of-type(3) .bc-list a",
            list: "td:nth-of-type(3) .bc-list",
        },
    },
    FieldSpec {
        header: "Minutes",
        source: Source::Text("td:nth-of-type(4)", Normalizer::Minutes),
    },
    FieldSpec {
        header: "Buy Date",
        source: Source::Text("td:nth-of-type(5)", Normalizer::Verbatim),
    },
    FieldSpec { header: "Rating", source: Source::StarCount(0) },
    FieldSpec { header: "Performance", source: Source::StarCount(1) },
    FieldSpec { header: "Story", source: Source::StarCount(2) },
    FieldSpec {
        header: "Time Left",
        source: Source::Text(
            "td:nth-of-type(1) .bc-col:nth-of-type(1) .bc-row:nth-of-type(3)",
            Normalizer::FirstLineMinutes,
        ),
    },
];
