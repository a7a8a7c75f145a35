use serde::{Deserialize, Serialize};

/// Application configuration, stored as JSON in the platform config directory.
///
/// Every field has a default so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Path of the SQLite store. `None` means `<data dir>/storage.db`.
    #[serde(default)]
    pub storage_path: Option<String>,
    /// Hand opened bookmarks to the system browser.
    #[serde(default = "default_true")]
    pub open_links: bool,
    /// Emit ANSI colors when rendering.
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Route shown at startup.
    #[serde(default = "default_start_path")]
    pub start_path: String,
    /// Number of entries in the "most used" panel.
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            open_links: true,
            color: true,
            log_level: default_log_level(),
            start_path: default_start_path(),
            top_limit: default_top_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_top_limit() -> usize {
    5
}
