// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::extract::table::Table;
use crate::render::render_file;

/// Write the rendered table to `export.out_path()`, creating parent
/// directories as needed. Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &Table) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_export_to(&path, export, table)?;
    Ok(path)
}

/// Same as `write_export`, but to an explicit path (CLI `-o`).
pub fn write_export_to(path: &Path, export: &ExportOptions, table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = render_file(table, export);
    fs::write(path, contents)?;
    logf!("Export: {} row(s) -> {}", table.row_count(), path.display());
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// `-o` may name a directory (existing, or ending in a separator); the
/// default file name is then placed inside it.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}
