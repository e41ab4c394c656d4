//! Apply a large batch in fixed-size chunks, persisting after each one.

use std::collections::{HashMap, HashSet};

use karuta_catalog::{Card, CardKey};
use karuta_store::CollectionStore;

use crate::diff::diff;
use crate::error::ImportError;
use crate::merge::{MergeMode, MergeOutcome, MergeStats, assign_placeholders};
use crate::progress::ImportProgress;

pub const DEFAULT_CHUNK_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOptions {
    /// Cards merged and persisted per step. Zero is treated as one.
    pub chunk_size: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Added,
    Updated,
    Unchanged,
}

/// Per-key classification across all chunks, so a key seen in several
/// chunks is counted once, the same way a single diff would count it.
#[derive(Default)]
struct Ledger {
    classes: HashMap<CardKey, Class>,
    added_order: Vec<CardKey>,
}

impl Ledger {
    fn record(&mut self, key: CardKey, class: Class) {
        match self.classes.get(&key).copied() {
            None => {
                if class == Class::Added {
                    self.added_order.push(key.clone());
                }
                self.classes.insert(key, class);
            }
            Some(Class::Unchanged) if class == Class::Updated => {
                self.classes.insert(key, Class::Updated);
            }
            Some(_) => {}
        }
    }

    fn count(&self, class: Class) -> usize {
        self.classes.values().filter(|c| **c == class).count()
    }
}

/// Merge `incoming` into `existing` chunk by chunk.
///
/// Chunks are applied strictly in order, each against the result of the
/// previous one, and the store is written after every chunk: `save` of the
/// whole collection in merge mode, `save` of the first chunk then `append`
/// of the rest in replace mode. `progress` hears `(processed, total)` after
/// each write.
///
/// If a write fails the import stops right there; chunks already written
/// stay written and the error reports how many cards made it.
pub async fn import_chunked<S: CollectionStore>(
    store: &S,
    existing: Vec<Card>,
    incoming: &[Card],
    mode: MergeMode,
    options: &ChunkOptions,
    progress: &dyn ImportProgress,
) -> Result<MergeOutcome, ImportError> {
    let total = incoming.len();
    let chunk_size = options.chunk_size.max(1);

    if mode == MergeMode::Replace {
        return replace_chunked(store, incoming, chunk_size, progress).await;
    }

    let incoming_keys: HashSet<CardKey> = incoming.iter().map(CardKey::of).collect();
    let removed = existing
        .iter()
        .filter(|card| !incoming_keys.contains(&CardKey::of(card)))
        .count();

    let mut collection = existing;
    let mut ledger = Ledger::default();
    let mut committed = 0;

    for chunk in incoming.chunks(chunk_size) {
        let step = diff(&collection, chunk);
        for card in &step.added {
            ledger.record(CardKey::of(card), Class::Added);
        }
        for card in &step.updated {
            ledger.record(CardKey::of(card), Class::Updated);
        }
        for card in &step.unchanged {
            ledger.record(CardKey::of(card), Class::Unchanged);
        }
        collection = step.into_collection();

        store
            .save(&collection)
            .await
            .map_err(|e| ImportError::exhausted(e, committed, total))?;
        committed += chunk.len();
        progress.on_chunk(committed, total);
    }

    let by_key: HashMap<CardKey, &Card> = collection.iter().map(|c| (CardKey::of(c), c)).collect();
    let added: Vec<Card> = ledger
        .added_order
        .iter()
        .filter_map(|key| by_key.get(key).map(|c| (*c).clone()))
        .collect();

    let stats = MergeStats {
        added: ledger.count(Class::Added),
        updated: ledger.count(Class::Updated),
        unchanged: ledger.count(Class::Unchanged),
        removed,
    };
    Ok(MergeOutcome {
        collection,
        added,
        stats,
    })
}

async fn replace_chunked<S: CollectionStore>(
    store: &S,
    incoming: &[Card],
    chunk_size: usize,
    progress: &dyn ImportProgress,
) -> Result<MergeOutcome, ImportError> {
    let total = incoming.len();
    let mut collection = incoming.to_vec();
    assign_placeholders(&mut collection);

    if collection.is_empty() {
        store.save(&collection).await.map_err(|e| ImportError::exhausted(e, 0, 0))?;
    }

    let mut committed = 0;
    for chunk in collection.chunks(chunk_size) {
        let write = if committed == 0 {
            store.save(chunk).await
        } else {
            store.append(chunk).await.map(|_| ())
        };
        write.map_err(|e| ImportError::exhausted(e, committed, total))?;
        committed += chunk.len();
        progress.on_chunk(committed, total);
    }

    Ok(MergeOutcome {
        added: collection.clone(),
        stats: MergeStats {
            added: total,
            ..MergeStats::default()
        },
        collection,
    })
}
