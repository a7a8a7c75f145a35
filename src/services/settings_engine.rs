// toolmarks configuration
// Reads config.json, applies `config set` / `config reset` edits, and writes the
// result back. Also decides where the SQLite store lives.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::platform;
use crate::types::config::AppConfig;
use crate::types::errors::ConfigError;

/// Environment variable that relocates the storage directory.
pub const DATA_DIR_ENV: &str = "TOOLMARKS_DATA_DIR";

/// File name of the SQLite store inside the data directory.
pub const STORAGE_FILE: &str = "storage.db";

/// Keys whose new value the running front end picks up immediately.
/// Everything else takes effect on the next start.
pub const LIVE_KEYS: [&str; 2] = ["color", "top_limit"];

pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<&AppConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_config(&self) -> &AppConfig;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;
    fn reset(&mut self) -> Result<(), ConfigError>;
    fn config_path(&self) -> &Path;
}

/// Owns the in-memory [`AppConfig`] and the file it came from.
pub struct SettingsEngine {
    path: PathBuf,
    config: AppConfig,
}

impl SettingsEngine {
    /// `path` replaces the default `<config dir>/config.json`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| platform::get_config_dir().join("config.json")),
            config: AppConfig::default(),
        }
    }

    /// One `key = value` line per setting, keys in alphabetical order.
    pub fn describe(&self) -> String {
        let mut lines = vec![format!("config file: {}", self.path.display())];
        if let Ok(Value::Object(map)) = serde_json::to_value(&self.config) {
            for (key, value) in map {
                lines.push(format!("  {} = {}", key, value));
            }
        }
        lines.join("\n")
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// A missing file leaves the defaults in place. On error the current
    /// config is kept.
    fn load(&mut self) -> Result<&AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", self.path.display());
                self.config = AppConfig::default();
                return Ok(&self.config);
            }
            Err(e) => {
                return Err(ConfigError::IoError(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        self.config = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(&self.config)
    }

    fn save(&self) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| ConfigError::IoError(format!("cannot create {}: {}", dir.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(&self.config)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| ConfigError::IoError(format!("cannot write {}: {}", self.path.display(), e)))
    }

    fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Replaces one setting and saves. The value must have the key's type,
    /// e.g. a number for `top_limit` or `null` to clear `storage_path`.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut next = self.config.clone();
        match key {
            "storage_path" => next.storage_path = typed(key, value)?,
            "open_links" => next.open_links = typed(key, value)?,
            "color" => next.color = typed(key, value)?,
            "log_level" => next.log_level = typed(key, value)?,
            "start_path" => next.start_path = typed(key, value)?,
            "top_limit" => next.top_limit = typed(key, value)?,
            _ => return Err(ConfigError::InvalidKey(key.to_string())),
        }
        self.config = next;
        self.save()?;
        log::info!("Config {} updated", key);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ConfigError> {
        self.config = AppConfig::default();
        self.save()?;
        log::info!("Config reset to defaults");
        Ok(())
    }

    fn config_path(&self) -> &Path {
        &self.path
    }
}

fn typed<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(format!("{}: {}", key, e)))
}

/// Reads a value typed at the prompt. JSON literals (`false`, `8`, `null`,
/// `"quoted"`) keep their type; anything else is taken as a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Resolves where the SQLite store lives.
///
/// Precedence: `TOOLMARKS_DATA_DIR`, then `storage_path` from the config,
/// then `<data dir>/storage.db`.
pub fn resolve_storage_path(config: &AppConfig) -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir).join(STORAGE_FILE);
        }
    }
    match &config.storage_path {
        Some(path) => PathBuf::from(path),
        None => platform::get_data_dir().join(STORAGE_FILE),
    }
}
