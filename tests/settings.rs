// tests/settings.rs
use std::fs;
use std::path::{Path, PathBuf};

use audible_export::config::options::{CatalogKind, ExportFormat};
use audible_export::config::settings;
use audible_export::config::state::AppState;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("audible_export_settings_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn missing_file_gives_defaults() {
    let state = settings::load(Path::new("definitely/not/here/settings.ini"));
    assert_eq!(state.options, AppState::default().options);
    assert!(state.gui.sources.is_empty());
}

#[test]
fn settings_round_trip() {
    let dir = tmp_dir("round_trip");
    let path = dir.join("nested").join("settings.ini");

    let mut state = AppState::default();
    state.options.set_catalog(CatalogKind::Wishlist);
    state.options.extract.include_image = true;
    state.options.extract.skip_header_row = false;
    state.options.export.format = ExportFormat::Csv;
    state.options.export.hyperlinks = true;
    state.options.export.include_headers = false;
    state.options.export.set_path(&format!("exports{}mine.csv", std::path::MAIN_SEPARATOR));
    state.gui.sources = vec![PathBuf::from("a.html"), PathBuf::from("b.html")];
    state.gui.window_w = 1280;

    settings::save(&path, &state).unwrap();
    let loaded = settings::load(&path);

    assert_eq!(loaded.options, state.options);
    assert_eq!(loaded.gui.sources, state.gui.sources);
    assert_eq!(loaded.gui.window_w, 1280);
    assert_eq!(loaded.gui.window_h, state.gui.window_h);
}

#[test]
fn loader_ignores_junk_and_applies_catalog_first() {
    let dir = tmp_dir("junk");
    let path = dir.join("settings.ini");
    fs::write(
        &path,
        "# comment\nskip_header_row=no\nformat=xls\nnonsense\ninclude_shows = yes\ncatalog=wishlist\nwindow_w=abc\n",
    )
    .unwrap();

    let state = settings::load(&path);
    assert_eq!(state.options.extract.catalog, CatalogKind::Wishlist);
    // explicit value wins over the catalog default, wherever it appears
    assert!(!state.options.extract.skip_header_row);
    assert!(state.options.extract.include_shows);
    assert_eq!(state.options.export.format, ExportFormat::Html);
    assert_eq!(state.gui.window_w, 1100);
    assert!(state.options.export.out_path().ends_with("wishlist.html"));
}
