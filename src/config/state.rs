// src/config/state.rs
use std::path::PathBuf;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Saved pages currently feeding the table, in load order
    pub sources: Vec<PathBuf>,

    /// Text box for the next page to load
    pub source_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            source_text: s!(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
