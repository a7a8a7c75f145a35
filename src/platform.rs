// toolmarks platform paths
//
// Linux:   config ~/.config/toolmarks, data ~/.local/share/toolmarks (XDG vars honored)
// macOS:   ~/Library/Application Support/toolmarks for both
// Windows: %APPDATA%/toolmarks for both
// Other Unix targets fall back to ~/.toolmarks.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "toolmarks";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns `$VAR/toolmarks` when `var` is set and non-empty.
#[cfg_attr(target_os = "macos", allow(dead_code))]
fn from_env(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| PathBuf::from(v).join(APP_DIR))
}

/// Directory holding `config.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        from_env("XDG_CONFIG_HOME").unwrap_or_else(|| home_dir().join(".config").join(APP_DIR))
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(target_os = "windows")]
    {
        from_env("APPDATA").unwrap_or_else(|| home_dir().join(APP_DIR))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".toolmarks")
    }
}

/// Directory holding the SQLite store.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        from_env("XDG_DATA_HOME")
            .unwrap_or_else(|| home_dir().join(".local").join("share").join(APP_DIR))
    }
    #[cfg(not(target_os = "linux"))]
    {
        get_config_dir()
    }
}
