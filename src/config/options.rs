// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Switch catalog, resetting the catalog-dependent defaults.
    pub fn set_catalog(&mut self, kind: CatalogKind) {
        self.extract.catalog = kind;
        self.extract.skip_header_row = kind.skips_header_row();
        self.export.set_default_stem_for(kind);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    #[default]
    Library,
    Wishlist,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Library, CatalogKind::Wishlist];

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Library => "Library",
            CatalogKind::Wishlist => "Wishlist",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CatalogKind::Library => "library",
            CatalogKind::Wishlist => "wishlist",
        }
    }

    /// The wishlist row query also matches the table's own header row.
    pub fn skips_header_row(self) -> bool {
        matches!(self, CatalogKind::Wishlist)
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "library" | "lib" => Ok(CatalogKind::Library),
            "wishlist" | "wish" => Ok(CatalogKind::Wishlist),
            other => Err(format!("Unknown catalog: {}", other)),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Options passed into the extraction entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub catalog: CatalogKind,
    /// Prepend a thumbnail column to the header and every record.
    pub include_image: bool,
    /// Keep "series/show" placeholder rows.
    pub include_shows: bool,
    /// Drop the first matched row (a header row caught by the row query).
    pub skip_header_row: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::for_catalog(CatalogKind::Library)
    }
}

impl ExtractOptions {
    pub fn for_catalog(catalog: CatalogKind) -> Self {
        Self {
            catalog,
            include_image: false,
            include_shows: false,
            skip_header_row: catalog.skips_header_row(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Csv, ExportFormat::Tsv];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
        }
    }

    /// Field separator for the delimited formats; `None` for HTML.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Html => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    fn from_ext(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.ext().eq_ignore_ascii_case(ext))
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ext(s.trim()).ok_or_else(|| format!("Unknown format: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Write single-link cells as spreadsheet HYPERLINK formulas (CSV/TSV only).
    pub hyperlinks: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            include_headers: true,
            hyperlinks: false,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final output path. The format decides the extension unless the user
    /// typed one the format doesn't own.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self
            .out_path
            .custom_ext
            .as_deref()
            .unwrap_or_else(|| self.format.ext());
        let file_name = if ext.is_empty() { stem.into_owned() } else { format!("{stem}.{ext}") };
        self.out_path.dir.join(file_name)
    }

    /// Parse a user-typed path into dir + stem (+ custom extension).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.custom_ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| ExportFormat::from_ext(e).is_none());
    }

    /// Reset the file stem to the catalog default, keeping the directory.
    pub fn set_default_stem_for(&mut self, kind: CatalogKind) {
        self.out_path.file_stem = OsString::from(kind.key());
        self.out_path.custom_ext = None;
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path.dir == Path::new(DEFAULT_OUT_DIR) && self.out_path.custom_ext.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    custom_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(CatalogKind::default().key()),
            custom_ext: None,
        }
    }
}
