//! Character image lookup.
//!
//! The import pipeline only sees the [`ImageLookup`] trait; [`JikanClient`]
//! is the HTTP implementation backed by the public Jikan (MyAnimeList) API.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MIN_INTERVAL, JikanClient, JikanConfig};
pub use error::LookupError;
pub use types::ImageCandidate;

/// A source of candidate images for a character.
#[allow(async_fn_in_trait)]
pub trait ImageLookup {
    /// Search for images of `name`, optionally narrowed by `series`.
    ///
    /// Candidates come back best first. An empty list means nothing was
    /// found; errors are reserved for transport failures.
    async fn search(
        &self,
        name: &str,
        series: Option<&str>,
    ) -> Result<Vec<ImageCandidate>, LookupError>;
}
