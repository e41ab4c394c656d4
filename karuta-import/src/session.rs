//! One import from raw text to a persisted collection.

use karuta_catalog::Card;
use karuta_lookup::ImageLookup;
use karuta_store::CollectionStore;

use crate::backfill::{BackfillOptions, BackfillStats, backfill_images};
use crate::chunked::{ChunkOptions, import_chunked};
use crate::detect::{InputFormat, InputKind, parse_input};
use crate::error::ImportError;
use crate::merge::{MergeMode, MergeStats};
use crate::progress::ImportProgress;

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub mode: MergeMode,
    pub kind: InputKind,
    pub chunk: ChunkOptions,
    /// `None` skips the image lookup.
    pub backfill: Option<BackfillOptions>,
}

/// What an import did.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub format: InputFormat,
    /// Cards read from the input.
    pub parsed: usize,
    pub stats: MergeStats,
    pub backfill: Option<BackfillStats>,
    /// The collection as persisted.
    pub collection: Vec<Card>,
}

/// Runs imports against one store and image source.
pub struct ImportSession<'a, S, L> {
    store: &'a S,
    lookup: &'a L,
    progress: &'a dyn ImportProgress,
}

impl<'a, S: CollectionStore, L: ImageLookup> ImportSession<'a, S, L> {
    pub fn new(store: &'a S, lookup: &'a L, progress: &'a dyn ImportProgress) -> Self {
        Self {
            store,
            lookup,
            progress,
        }
    }

    /// Parse `text`, merge it into the stored collection chunk by chunk,
    /// look up images for the new cards, and save the result.
    pub async fn run(&self, text: &str, options: &ImportOptions) -> Result<ImportReport, ImportError> {
        let parsed = parse_input(text, options.kind)?;
        let count = parsed.cards.len();
        self.progress
            .on_phase(&format!("Importing {} cards ({}, {} mode)", count, parsed.format, options.mode));

        let existing = match options.mode {
            MergeMode::Merge => self.store.load().await?,
            MergeMode::Replace => Vec::new(),
        };

        let outcome = import_chunked(
            self.store,
            existing,
            &parsed.cards,
            options.mode,
            &options.chunk,
            self.progress,
        )
        .await?;
        let mut collection = outcome.collection;

        let backfill = match &options.backfill {
            Some(backfill_options) if outcome.added.iter().any(Card::needs_image) => {
                self.progress.on_phase("Looking up images");
                let stats = backfill_images(
                    self.lookup,
                    &mut collection,
                    &outcome.added,
                    backfill_options,
                    self.progress,
                )
                .await;
                self.store
                    .save(&collection)
                    .await
                    .map_err(|e| ImportError::exhausted(e, count, count))?;
                Some(stats)
            }
            _ => None,
        };

        self.progress.on_complete(&format!("Import complete: {}", outcome.stats));
        Ok(ImportReport {
            format: parsed.format,
            parsed: count,
            stats: outcome.stats,
            backfill,
            collection,
        })
    }
}
