use std::io;
use std::path::{Path, PathBuf};

use karuta_catalog::Card;

use crate::CollectionStore;
use crate::error::StoreError;

/// Collection stored as a JSON array in a single file.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash or a rejected write never leaves a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    max_bytes: Option<u64>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_bytes: None,
        }
    }

    /// Refuse writes whose serialized size would exceed `max_bytes`.
    pub fn with_capacity(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_all(&self, cards: &[Card]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(cards)?;
        if let Some(max) = self.max_bytes {
            if bytes.len() as u64 > max {
                return Err(StoreError::capacity(bytes.len() as u64, max));
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        log::debug!("Wrote {} cards ({} bytes) to {}", cards.len(), bytes.len(), self.path.display());
        Ok(())
    }
}

impl CollectionStore for JsonFileStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }

    async fn load(&self) -> Result<Vec<Card>, StoreError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&contents)?)
    }

    async fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        self.write_all(cards).await
    }

    async fn append(&self, cards: &[Card]) -> Result<usize, StoreError> {
        let mut all = self.load().await?;
        all.extend_from_slice(cards);
        self.write_all(&all).await?;
        Ok(all.len())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
