//! Persistence for the card collection.
//!
//! The collection is stored as a single blob. [`CollectionStore`] is the seam
//! the import engine writes through; [`JsonFileStore`] and [`MemoryStore`]
//! are the two implementations shipped here.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod settings;

use karuta_catalog::Card;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use settings::{Settings, default_collection_path, load_settings, save_settings, settings_path};

/// Whole-collection persistence.
///
/// Implementations keep card order and every field (including passthrough
/// fields) exactly as given. Writes are atomic: a failed `save` or `append`
/// leaves the previous contents in place.
#[allow(async_fn_in_trait)]
pub trait CollectionStore {
    /// Whether a collection has been saved before.
    async fn exists(&self) -> Result<bool, StoreError>;

    /// Load the stored collection. A store with nothing saved yields an
    /// empty collection.
    async fn load(&self) -> Result<Vec<Card>, StoreError>;

    /// Replace the stored collection.
    async fn save(&self, cards: &[Card]) -> Result<(), StoreError>;

    /// Add cards to the end of the stored collection and return the new
    /// total.
    async fn append(&self, cards: &[Card]) -> Result<usize, StoreError>;

    /// Remove the stored collection.
    async fn clear(&self) -> Result<(), StoreError>;
}
