use std::path::PathBuf;

/// Errors from persisting the collection or the settings file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collection data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage capacity exceeded: {needed} needed, {capacity} available")]
    CapacityExceeded { needed: u64, capacity: u64 },

    #[error("Settings error in {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidSetting { key: String, message: String },
}

impl StoreError {
    pub fn capacity(needed: u64, capacity: u64) -> Self {
        Self::CapacityExceeded { needed, capacity }
    }

    pub fn settings(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_setting(key: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Whether retrying with less data could succeed.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}
