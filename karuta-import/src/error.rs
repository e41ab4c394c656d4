use karuta_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Every parser came back empty.
    #[error("No valid cards found in the input")]
    NothingValid,

    /// A write failed partway through a chunked import. The first
    /// `committed` cards of the batch are persisted.
    #[error("Storage exhausted after {committed} of {total} cards: {source}")]
    StorageExhausted {
        committed: usize,
        total: usize,
        #[source]
        source: StoreError,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    pub fn exhausted(source: StoreError, committed: usize, total: usize) -> Self {
        Self::StorageExhausted {
            committed,
            total,
            source,
        }
    }

    /// Whether retrying with a smaller batch might succeed.
    pub fn is_storage_exhausted(&self) -> bool {
        matches!(self, Self::StorageExhausted { .. })
    }
}
