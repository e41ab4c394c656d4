//! Classify an incoming batch against the existing collection.

use std::collections::HashMap;

use karuta_catalog::{Card, CardField};
pub use karuta_catalog::CardKey;

/// Where a card ended up in the merged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Existing(usize),
    Added(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Untouched,
    Unchanged,
    Updated,
}

/// The result of comparing an incoming batch to a collection.
///
/// `updated` holds the merged records; `unchanged` and `removed` hold the
/// existing records verbatim. Removal is reporting only: cards missing from
/// the batch stay in [`CollectionDiff::into_collection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionDiff {
    pub added: Vec<Card>,
    pub updated: Vec<Card>,
    pub unchanged: Vec<Card>,
    pub removed: Vec<Card>,
    /// Existing collection with updates applied, in original order.
    merged_existing: Vec<Card>,
}

impl CollectionDiff {
    /// The merged collection: existing order (updates applied), then the
    /// added cards in batch order.
    pub fn into_collection(self) -> Vec<Card> {
        let mut collection = self.merged_existing;
        collection.extend(self.added);
        collection
    }

    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// Whether an incoming card differs from the stored one in a way the user
/// cares about.
fn differs(existing: &Card, incoming: &Card) -> bool {
    existing.quality != incoming.quality
        || existing.print != incoming.print
        || existing.edition != incoming.edition
        || existing.tag != incoming.tag
}

/// The record kept for an update: the incoming card, except that a real
/// image the user already has survives the re-import, and secondary or
/// passthrough values the batch leaves empty keep their stored value.
fn merge_update(existing: &Card, incoming: &Card) -> Card {
    let mut merged = incoming.clone();
    if !existing.needs_image() || merged.image_url.is_empty() {
        merged.image_url = existing.image_url.clone();
    }

    for field in CardField::ALL.into_iter().filter(|f| f.is_secondary()) {
        if let (Some(slot), Some(stored)) = (merged.secondary_mut(field), existing.text(field)) {
            if slot.is_empty() {
                slot.push_str(stored);
            }
        }
    }
    for (key, stored) in &existing.extra {
        let slot = merged.extra.entry(key.clone()).or_default();
        if slot.is_empty() {
            slot.clone_from(stored);
        }
    }
    merged
}

/// Compare `incoming` to `existing`.
///
/// Duplicate keys in the batch are applied in order against the already
/// updated state, so the last occurrence wins and each key is counted once:
/// an added key stays added, and an unchanged key that a later duplicate
/// changes becomes updated.
pub fn diff(existing: &[Card], incoming: &[Card]) -> CollectionDiff {
    let mut merged_existing = existing.to_vec();
    let mut status = vec![Status::Untouched; existing.len()];
    let mut added: Vec<Card> = Vec::new();

    let mut index: HashMap<CardKey, Slot> = HashMap::with_capacity(existing.len() + incoming.len());
    for (i, card) in existing.iter().enumerate() {
        // First occurrence owns the key if the collection already has duplicates.
        index.entry(CardKey::of(card)).or_insert(Slot::Existing(i));
    }

    for card in incoming {
        match index.get(&CardKey::of(card)).copied() {
            Some(Slot::Existing(i)) => {
                let current = &merged_existing[i];
                if differs(current, card) {
                    let merged = merge_update(current, card);
                    merged_existing[i] = merged;
                    status[i] = Status::Updated;
                } else if status[i] == Status::Untouched {
                    status[i] = Status::Unchanged;
                }
            }
            Some(Slot::Added(j)) => {
                let replacement = merge_update(&added[j], card);
                added[j] = replacement;
            }
            None => {
                index.insert(CardKey::of(card), Slot::Added(added.len()));
                added.push(card.clone());
            }
        }
    }

    let mut result = CollectionDiff {
        added,
        ..CollectionDiff::default()
    };
    for (card, status) in merged_existing.iter().zip(&status) {
        match status {
            Status::Untouched => result.removed.push(card.clone()),
            Status::Unchanged => result.unchanged.push(card.clone()),
            Status::Updated => result.updated.push(card.clone()),
        }
    }
    result.merged_existing = merged_existing;
    result
}

#[cfg(test)]
#[path = "tests/diff_tests.rs"]
mod tests;
