// src/config/settings.rs
//
// Persisted options as a tolerant `key=value` file. Unknown keys and
// malformed values are ignored; a missing file yields defaults.
use std::{fs, io, path::{Path, PathBuf}};

use super::options::{AppOptions, CatalogKind, ExportFormat};
use super::state::AppState;

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flag(b: bool) -> u8 {
    if b { 1 } else { 0 }
}

pub fn load(path: &Path) -> AppState {
    let mut state = AppState::default();
    let Ok(text) = fs::read_to_string(path) else {
        return state;
    };

    // Catalog first: it resets the catalog-dependent defaults.
    let pairs: Vec<(&str, &str)> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect();

    if let Some(kind) = pairs
        .iter()
        .find(|(k, _)| *k == "catalog")
        .and_then(|(_, v)| v.parse::<CatalogKind>().ok())
    {
        state.options.set_catalog(kind);
    }

    let opts: &mut AppOptions = &mut state.options;
    for (key, val) in pairs {
        match key {
            "include_image" => if let Some(b) = parse_bool(val) { opts.extract.include_image = b },
            "include_shows" => if let Some(b) = parse_bool(val) { opts.extract.include_shows = b },
            "skip_header_row" => if let Some(b) = parse_bool(val) { opts.extract.skip_header_row = b },
            "include_headers" => if let Some(b) = parse_bool(val) { opts.export.include_headers = b },
            "hyperlinks" => if let Some(b) = parse_bool(val) { opts.export.hyperlinks = b },
            "format" => if let Ok(f) = val.parse::<ExportFormat>() { opts.export.format = f },
            "out_path" => if !val.is_empty() { opts.export.set_path(val) },
            "window_w" => if let Ok(w) = val.parse::<u32>() { state.gui.window_w = w.max(400) },
            "window_h" => if let Ok(h) = val.parse::<u32>() { state.gui.window_h = h.max(300) },
            "source" => if !val.is_empty() { state.gui.sources.push(PathBuf::from(val)) },
            _ => {}
        }
    }
    state
}

pub fn to_settings_string(state: &AppState) -> String {
    let o = &state.options;
    let mut s = s!("# audible_export settings\n");
    s.push_str(&format!("catalog={}\n", o.extract.catalog.key()));
    s.push_str(&format!("include_image={}\n", flag(o.extract.include_image)));
    s.push_str(&format!("include_shows={}\n", flag(o.extract.include_shows)));
    s.push_str(&format!("skip_header_row={}\n", flag(o.extract.skip_header_row)));
    s.push_str(&format!("format={}\n", o.export.format.ext()));
    s.push_str(&format!("include_headers={}\n", flag(o.export.include_headers)));
    s.push_str(&format!("hyperlinks={}\n", flag(o.export.hyperlinks)));
    s.push_str(&format!("out_path={}\n", o.export.out_path().display()));
    s.push_str(&format!("window_w={}\nwindow_h={}\n", state.gui.window_w, state.gui.window_h));
    for src in &state.gui.sources {
        s.push_str(&format!("source={}\n", src.display()));
    }
    s
}

pub fn save(path: &Path, state: &AppState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_settings_string(state))
}
