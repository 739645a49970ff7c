// tests/extract_library.rs
use audible_export::config::options::{CatalogKind, ExtractOptions};
use audible_export::core::rich::RichText;
use audible_export::extract::{extract_str, table::Cell};

const LIBRARY: &str = include_str!("fixtures/library.html");

fn opts() -> ExtractOptions {
    ExtractOptions::for_catalog(CatalogKind::Library)
}

#[test]
fn default_options_skip_show_rows() {
    let table = extract_str(LIBRARY, &opts());

    assert_eq!(
        table.header_labels(),
        vec!["Title", "Author", "Minutes", "Buy Date", "Rating", "Performance", "Story", "Time Left"]
    );
    assert_eq!(table.row_count(), 2);

    let first = &table.records()[0];
    assert_eq!(first.get(0), Some(&Cell::Rich(RichText::link("Dune & Co", "/pd/B1"))));
    assert_eq!(first.get(2), Some(&Cell::Minutes(135)));
    assert_eq!(first.get(3), Some(&Cell::Text("05-01-21".into())));
    assert_eq!(first.get(4), Some(&Cell::Rating(5.0)));
    assert_eq!(first.get(5), Some(&Cell::Rating(4.5)));
    assert_eq!(first.get(6), Some(&Cell::Rating(4.0)));
    assert_eq!(first.get(7), Some(&Cell::Minutes(62)));
}

#[test]
fn missing_ratings_are_zero() {
    let table = extract_str(LIBRARY, &opts());
    let last = &table.records()[1];

    assert_eq!(last.display_row(), vec![
        "Quiet Moss (Unabridged)", "Cy Moss", "45", "12-24-20", "0", "0", "0", "0",
    ]);
    assert_eq!(last.get(4), Some(&Cell::Rating(0.0)));
}

#[test]
fn include_shows_keeps_placeholder_rows() {
    let mut o = opts();
    o.include_shows = true;
    let table = extract_str(LIBRARY, &o);

    assert_eq!(table.row_count(), 3);
    let show = &table.records()[1];
    assert_eq!(show.get(0), Some(&Cell::Rich(RichText::link("Some Podcast", "/pd/P2"))));
    assert_eq!(show.get(2), Some(&Cell::Minutes(0)));
}

#[test]
fn several_authors_collapse_into_one_search_link() {
    let table = extract_str(LIBRARY, &opts());
    let author = table.records()[0].get(1).cloned();

    assert_eq!(
        author,
        Some(Cell::Rich(RichText::link(
            "Ann Lee Bo Ray",
            "/search?searchAuthor=Ann%20Lee%20Bo%20Ray"
        )))
    );
}

#[test]
fn single_author_link_passes_through() {
    let table = extract_str(LIBRARY, &opts());
    assert_eq!(
        table.records()[1].get(1),
        Some(&Cell::Rich(RichText::link("Cy Moss", "/author/cy-moss")))
    );
}

#[test]
fn title_keeps_link_and_trailing_text() {
    let table = extract_str(LIBRARY, &opts());
    let Some(Cell::Rich(title)) = table.records()[1].get(0) else {
        panic!("title should be rich");
    };
    assert_eq!(title.single_link(), None);
    assert_eq!(title.plain_text(), "Quiet Moss (Unabridged)");
}

#[test]
fn image_column_adds_exactly_one_cell() {
    for include_shows in [false, true] {
        let mut o = opts();
        o.include_shows = include_shows;
        let plain = extract_str(LIBRARY, &o);

        o.include_image = true;
        let with_image = extract_str(LIBRARY, &o);

        assert_eq!(with_image.width(), plain.width() + 1);
        assert_eq!(with_image.header_labels()[0], "Image");
        for r in with_image.records() {
            assert_eq!(r.len(), with_image.width());
        }
        for r in plain.records() {
            assert_eq!(r.len(), plain.width());
        }
    }
}

#[test]
fn image_cell_has_forced_width() {
    let mut o = opts();
    o.include_image = true;
    let table = extract_str(LIBRARY, &o);

    assert_eq!(
        table.records()[0].get(0),
        Some(&Cell::Rich(RichText::image(
            "https://m.media.example/images/I/dune.jpg",
            "Dune & Co cover",
            Some(90)
        )))
    );
}

#[test]
fn unrelated_markup_yields_empty_table() {
    let table = extract_str("<html><body><p>Sign in</p></body></html>", &opts());
    assert!(table.is_empty());
    assert_eq!(table.width(), 8);
}

#[test]
fn skip_header_row_drops_first_library_row() {
    let mut o = opts();
    o.skip_header_row = true;
    let table = extract_str(LIBRARY, &o);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.records()[0].display_row()[0], "Quiet Moss (Unabridged)");
}

const TWO_LISTS: &str = r#"<table><tbody>
<tr class="adbl-library-row">
  <td></td>
  <td>
    <ul class="bc-list"><li class="bc-list-item"><a href="/pd/B9">Twin</a></li></ul>
    <ul class="bc-list"><li class="bc-list-item">Book 2</li></ul>
  </td>
  <td>
    <ul class="bc-list"><li class="bc-list-item"><a href="/author/ann-lee">Ann Lee</a></li></ul>
    <ul class="bc-list"><li class="bc-list-item"><a href="/author/bo-ray">Bo Ray</a></li></ul>
  </td>
  <td>3h</td>
  <td>01-01-24</td>
</tr>
</tbody></table>"#;

#[test]
fn authors_split_across_lists_all_reach_the_label() {
    let table = extract_str(TWO_LISTS, &opts());
    assert_eq!(table.row_count(), 1);
    assert_eq!(
        table.records()[0].get(1),
        Some(&Cell::Rich(RichText::link(
            "Ann Lee Bo Ray",
            "/search?searchAuthor=Ann%20Lee%20Bo%20Ray"
        )))
    );
}

#[test]
fn title_takes_contents_of_every_match() {
    let table = extract_str(TWO_LISTS, &opts());
    let Some(Cell::Rich(title)) = table.records()[0].get(0) else {
        panic!("title should be rich");
    };
    assert_eq!(title.plain_text(), "Twin Book 2");
    assert_eq!(title.segments().len(), 2);
}

#[test]
fn catalog_specs_know_their_kind() {
    for kind in CatalogKind::ALL {
        assert_eq!(audible_export::specs::spec_for(kind).kind, kind);
    }
}
