//! Apply an incoming batch to a collection under a merge policy.

use std::fmt;
use std::str::FromStr;

use karuta_catalog::{Card, PLACEHOLDER_IMAGE};

use crate::diff::diff;

/// How an import treats the cards already in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Reconcile against the collection; nothing is ever dropped.
    #[default]
    Merge,
    /// The batch becomes the whole collection.
    Replace,
}

impl MergeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MergeMode::Merge => "merge",
            MergeMode::Replace => "replace",
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `MergeMode`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown import mode: '{0}' (expected 'merge' or 'replace')")]
pub struct MergeModeParseError(pub String);

impl FromStr for MergeMode {
    type Err = MergeModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(MergeMode::Merge),
            "replace" => Ok(MergeMode::Replace),
            _ => Err(MergeModeParseError(s.to_string())),
        }
    }
}

/// Counts from one merge. `removed` is informational: those cards are
/// still in the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub removed: usize,
}

impl MergeStats {
    /// Add another step's counts to these. `removed` is left alone since it
    /// only makes sense for a whole batch.
    pub fn accumulate(&mut self, other: &MergeStats) {
        self.added += other.added;
        self.updated += other.updated;
        self.unchanged += other.unchanged;
    }
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} added, ~{} updated, {} unchanged, -{} not in batch",
            self.added, self.updated, self.unchanged, self.removed
        )
    }
}

/// The merged collection plus what changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub collection: Vec<Card>,
    /// Cards that are new to the collection, as stored in `collection`.
    pub added: Vec<Card>,
    pub stats: MergeStats,
}

/// Give every card without an image the placeholder reference.
pub fn assign_placeholders(cards: &mut [Card]) {
    for card in cards.iter_mut().filter(|c| c.image_url.is_empty()) {
        card.image_url = PLACEHOLDER_IMAGE.to_string();
    }
}

/// Merge `incoming` into `existing`.
///
/// In [`MergeMode::Replace`] the batch replaces the collection outright and
/// every card counts as added. In [`MergeMode::Merge`] the batch is diffed
/// against the collection and no existing card is dropped.
pub fn merge(existing: &[Card], incoming: &[Card], mode: MergeMode) -> MergeOutcome {
    match mode {
        MergeMode::Replace => {
            let mut collection = incoming.to_vec();
            assign_placeholders(&mut collection);
            MergeOutcome {
                added: collection.clone(),
                stats: MergeStats {
                    added: collection.len(),
                    ..MergeStats::default()
                },
                collection,
            }
        }
        MergeMode::Merge => {
            let result = diff(existing, incoming);
            let stats = MergeStats {
                added: result.added.len(),
                updated: result.updated.len(),
                unchanged: result.unchanged.len(),
                removed: result.removed.len(),
            };
            log::debug!("Merged batch of {}: {}", incoming.len(), stats);
            let added = result.added.clone();
            MergeOutcome {
                collection: result.into_collection(),
                added,
                stats,
            }
        }
    }
}
