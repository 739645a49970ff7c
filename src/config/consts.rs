// src/config/consts.rs

// Local state
pub const LOG_FILE: &str = ".store/debug.log";
pub const SETTINGS_FILE: &str = ".store/settings.ini";

// Extraction
pub const PLACEHOLDER_LABEL: &str = "View all episodes";
pub const STAR_COUNT_ATTR: &str = "data-star-count";
pub const SEARCH_AUTHOR_PATH: &str = "/search?searchAuthor=";
pub const IMAGE_WIDTH: u32 = 90;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const HTML_TABLE_WIDTH: &str = "70%";
