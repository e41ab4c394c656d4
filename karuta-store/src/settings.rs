//! User settings shared by every frontend.
//!
//! The settings file lives at `~/.config/karuta-vault/settings.toml`. Every
//! field has a default, so a missing file or a missing table is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub import: ImportSettings,
    #[serde(default)]
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectionSettings {
    /// Collection file. Falls back to [`default_collection_path`].
    pub path: Option<PathBuf>,
    /// Largest collection file the store will write, in bytes.
    pub max_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// "merge" or "replace".
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Look up images for newly added cards.
    #[serde(default = "default_true")]
    pub backfill_images: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mode() -> String {
    "merge".to_string()
}

fn default_chunk_size() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_min_interval_ms() -> u64 {
    400
}

fn default_concurrency() -> usize {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            chunk_size: default_chunk_size(),
            backfill_images: true,
        }
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            min_interval_ms: default_min_interval_ms(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Collection file to use, honoring the configured override.
    pub fn collection_path(&self) -> PathBuf {
        self.collection
            .path
            .clone()
            .unwrap_or_else(default_collection_path)
    }

    /// Every key accepted by [`Settings::set`], as `table.field`.
    pub const KEYS: [&'static str; 9] = [
        "collection.path",
        "collection.max_bytes",
        "import.mode",
        "import.chunk_size",
        "import.backfill_images",
        "lookup.base_url",
        "lookup.min_interval_ms",
        "lookup.concurrency",
        "lookup.timeout_secs",
    ];

    /// Set one value from its `table.field` key and string form.
    ///
    /// An empty value clears the optional collection settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let value = value.trim();
        match key.trim() {
            "collection.path" => {
                self.collection.path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "collection.max_bytes" => {
                self.collection.max_bytes = if value.is_empty() {
                    None
                } else {
                    Some(parse_number(key, value)?)
                };
            }
            "import.mode" => match value.to_lowercase().as_str() {
                mode @ ("merge" | "replace") => self.import.mode = mode.to_string(),
                _ => return Err(StoreError::invalid_setting(key, "expected 'merge' or 'replace'")),
            },
            "import.chunk_size" => self.import.chunk_size = parse_number(key, value)?,
            "import.backfill_images" => {
                self.import.backfill_images = value
                    .parse()
                    .map_err(|_| StoreError::invalid_setting(key, "expected 'true' or 'false'"))?;
            }
            "lookup.base_url" => self.lookup.base_url = value.to_string(),
            "lookup.min_interval_ms" => self.lookup.min_interval_ms = parse_number(key, value)?,
            "lookup.concurrency" => self.lookup.concurrency = parse_number(key, value)?,
            "lookup.timeout_secs" => self.lookup.timeout_secs = parse_number(key, value)?,
            other => return Err(StoreError::invalid_setting(other, "unknown key")),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, StoreError> {
    value
        .parse()
        .map_err(|_| StoreError::invalid_setting(key, format!("'{value}' is not a number")))
}

/// Returns `~/.config/karuta-vault/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("karuta-vault").join("settings.toml")
}

/// Returns `~/.local/share/karuta-vault/collection.json` (or the platform
/// equivalent).
pub fn default_collection_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("karuta-vault").join("collection.json")
}

/// Load settings from `path`. A missing file yields the defaults; a file
/// that does not parse is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| StoreError::settings(path, e)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load settings from the standard location, returning defaults if missing
/// or corrupt.
pub fn load_settings() -> Settings {
    let path = settings_path();
    load_settings_from(&path).unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Settings::default()
    })
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(|e| StoreError::settings(path, e))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Save settings to the standard location.
pub fn save_settings(settings: &Settings) -> Result<(), StoreError> {
    save_settings_to(&settings_path(), settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
