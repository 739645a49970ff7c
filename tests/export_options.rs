// tests/export_options.rs
use std::fs;
use std::path::PathBuf;

use audible_export::config::options::{AppOptions, CatalogKind, ExportFormat};
use audible_export::extract::extract_str;
use audible_export::file;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("audible_export_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn default_path_follows_catalog_and_format() {
    let mut opts = AppOptions::default();
    assert_eq!(opts.export.out_path(), PathBuf::from("out").join("library.html"));
    assert!(opts.export.is_default_path());

    opts.export.format = ExportFormat::Tsv;
    assert_eq!(opts.export.out_path(), PathBuf::from("out").join("library.tsv"));

    opts.set_catalog(CatalogKind::Wishlist);
    assert_eq!(opts.export.out_path(), PathBuf::from("out").join("wishlist.tsv"));
    assert!(opts.extract.skip_header_row);
}

#[test]
fn user_extension_survives_format_changes() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("ext");
    opts.export.set_path(dir.join("hello.txt").to_str().unwrap());

    opts.export.format = ExportFormat::Csv;
    assert_eq!(opts.export.out_path(), dir.join("hello.txt"));
    assert!(!opts.export.is_default_path());
}

#[test]
fn known_extension_follows_format() {
    let mut opts = AppOptions::default();
    opts.export.set_path("reports/books.csv");
    opts.export.format = ExportFormat::Html;
    assert_eq!(opts.export.out_path(), PathBuf::from("reports").join("books.html"));
    assert_eq!(opts.export.current_dir(), PathBuf::from("reports").as_path());
}

#[test]
fn write_export_creates_directories() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("write");
    let target = dir.join("deep").join("library.csv");
    opts.export.set_path(target.to_str().unwrap());
    opts.export.format = ExportFormat::Csv;

    let table = extract_str(include_str!("fixtures/library.html"), &opts.extract);
    let written = file::write_export(&opts.export, &table).unwrap();

    assert_eq!(written, target);
    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Title,Author,Minutes"));
    assert!(lines[1].starts_with("Dune & Co,Ann Lee Bo Ray,135,05-01-21,5,4.5,4,62"));
}

#[test]
fn html_export_is_a_full_document() {
    let opts = AppOptions::default();
    let dir = tmp_dir("html");
    let path = dir.join("lib.html");

    let table = extract_str(include_str!("fixtures/library.html"), &opts.extract);
    file::write_export_to(&path, &opts.export, &table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<!DOCTYPE html>"));
    assert!(text.contains("<a href=\"/pd/B1\">Dune &amp; Co</a>"));
}

#[test]
fn out_path_hint_directory_gets_default_name() {
    let dir = tmp_dir("hint");
    let hint = format!("{}{}", dir.join("sub").display(), std::path::MAIN_SEPARATOR);
    let p = file::resolve_out_path(&hint, "library.csv").unwrap();
    assert_eq!(p, dir.join("sub").join("library.csv"));
    assert!(dir.join("sub").is_dir());

    let plain = file::resolve_out_path("x/y.tsv", "library.csv").unwrap();
    assert!(plain.ends_with("y.tsv"));
}

#[test]
fn ensure_directory_rejects_files() {
    let dir = tmp_dir("notdir");
    let f = dir.join("file");
    fs::write(&f, "x").unwrap();
    assert!(file::ensure_directory(&f).is_err());
}
