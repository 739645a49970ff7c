// tests/assemble.rs
use std::fs;
use std::path::PathBuf;

use audible_export::config::options::{CatalogKind, ExtractOptions};
use audible_export::extract::{assemble_many, extract_files, extract_str};
use audible_export::extract::table::{Cell, Record, Table};
use audible_export::progress::Progress;

const LIBRARY: &str = include_str!("fixtures/library.html");
const WISHLIST: &str = include_str!("fixtures/wishlist.html");

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("audible_export_assemble_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[derive(Default)]
struct Recorder {
    total: usize,
    messages: Vec<String>,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn item_done(&mut self, label: &str, rows: usize) {
        self.done.push((label.to_string(), rows));
    }

    fn item_failed(&mut self, label: &str, _err: &str) {
        self.failed.push(label.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn pages_concatenate_under_one_header_in_order() {
    let opts = ExtractOptions::for_catalog(CatalogKind::Wishlist);
    let single = extract_str(WISHLIST, &opts);
    let table = assemble_many([WISHLIST, WISHLIST], &opts);

    assert_eq!(table.header(), single.header());
    assert_eq!(table.row_count(), 4);
    assert_eq!(&table.records()[..2], single.records());
    assert_eq!(&table.records()[2..], single.records());
}

#[test]
fn no_pages_gives_header_only() {
    let opts = ExtractOptions::default();
    let table = assemble_many(std::iter::empty::<&str>(), &opts);
    assert!(table.is_empty());
    assert_eq!(table.width(), 8);
}

#[test]
fn unreadable_files_are_reported_and_skipped() {
    let dir = tmp_dir("files");
    let good = dir.join("library-1.html");
    fs::write(&good, LIBRARY).unwrap();
    let missing = dir.join("library-2.html");

    let mut rec = Recorder::default();
    let summary = extract_files(
        &[good.clone(), missing.clone(), good.clone()],
        &ExtractOptions::default(),
        Some(&mut rec),
    );

    assert_eq!(summary.table.row_count(), 4);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, missing);

    assert_eq!(rec.total, 3);
    assert_eq!(rec.messages.len(), 3);
    assert_eq!(rec.messages[1], format!("Reading {}", missing.display()));
    assert_eq!(rec.done.len(), 2);
    assert_eq!(rec.done[0].1, 2);
    assert_eq!(rec.failed, vec![missing.display().to_string()]);
    assert!(rec.finished);
}

#[test]
fn non_utf8_pages_are_decoded_lossily() {
    let dir = tmp_dir("latin1");
    let path = dir.join("page.html");
    let mut bytes = LIBRARY.as_bytes().to_vec();
    bytes.extend_from_slice(b"<!-- caf\xe9 -->");
    fs::write(&path, bytes).unwrap();

    let summary = extract_files(&[path], &ExtractOptions::default(), None);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.table.row_count(), 2);
}

#[test]
fn table_fits_records_to_header_arity() {
    let mut table = Table::new(audible_export::header!["A", "B", "C"]);
    table.push(Record::new(vec![Cell::Minutes(1)]));
    table.push(Record::new(vec![
        Cell::Minutes(1), Cell::Minutes(2), Cell::Minutes(3), Cell::Minutes(4),
    ]));

    for r in table.records() {
        assert_eq!(r.len(), 3);
    }
    assert_eq!(table.display_rows()[0], vec!["1", "", ""]);
    assert_eq!(table.display_rows()[1], vec!["1", "2", "3"]);
    assert_eq!(table.numeric_columns(), vec![true, false, false]);
}
