// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use audible_export::{
    config::options::{CatalogKind, ExportFormat, ExportOptions, ExtractOptions},
    extract, render,
};

const LIBRARY: &str = include_str!("../tests/fixtures/library.html");
const WISHLIST: &str = include_str!("../tests/fixtures/wishlist.html");

/// A large library page: the fixture's rows repeated `n` times.
fn big_library(n: usize) -> String {
    let start = LIBRARY.find("<tbody>").map(|i| i + "<tbody>".len()).unwrap_or(0);
    let end = LIBRARY.find("</tbody>").unwrap_or(LIBRARY.len());
    let rows = &LIBRARY[start..end];
    format!("{}{}{}", &LIBRARY[..start], rows.repeat(n), &LIBRARY[end..])
}

fn bench_extract(c: &mut Criterion) {
    let big = big_library(200);
    let lib_opts = ExtractOptions::for_catalog(CatalogKind::Library);
    let wish_opts = ExtractOptions::for_catalog(CatalogKind::Wishlist);

    c.bench_function("library_600_rows", |b| {
        b.iter(|| {
            let table = extract::extract_str(black_box(&big), &lib_opts);
            black_box(table.row_count())
        })
    });

    c.bench_function("wishlist_pages_x10", |b| {
        let pages = vec![WISHLIST; 10];
        b.iter(|| {
            let table = extract::assemble_many(pages.iter().copied(), &wish_opts);
            black_box(table.row_count())
        })
    });

    let table = extract::extract_str(&big, &lib_opts);
    let mut html = ExportOptions::default();
    html.format = ExportFormat::Html;
    let mut csv = ExportOptions::default();
    csv.format = ExportFormat::Csv;
    csv.hyperlinks = true;

    c.bench_function("render_html", |b| b.iter(|| black_box(render::render(&table, &html).len())));
    c.bench_function("render_csv", |b| b.iter(|| black_box(render::render(&table, &csv).len())));
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
