//! Best-effort image lookup for newly added cards.

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt};
use karuta_catalog::{Card, CardKey, PLACEHOLDER_IMAGE};
use karuta_lookup::ImageLookup;
use tokio::time::Duration;

use crate::progress::ImportProgress;

pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillOptions {
    /// Lookups in flight at once. Zero is treated as one.
    pub concurrency: usize,
    /// Limit for a single lookup, after which the card gets the placeholder.
    pub timeout: Duration,
}

impl Default for BackfillOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillStats {
    pub resolved: usize,
    pub placeholders: usize,
}

/// Look up images for the cards in `targets` that need one and write the
/// results into `collection`, matching by card key.
///
/// Lookups run concurrently, `options.concurrency` at a time. The first
/// candidate wins. A lookup that fails, times out or finds nothing gives
/// that card the placeholder image; no single failure affects the rest.
pub async fn backfill_images<L: ImageLookup>(
    lookup: &L,
    collection: &mut [Card],
    targets: &[Card],
    options: &BackfillOptions,
    progress: &dyn ImportProgress,
) -> BackfillStats {
    let mut seen = HashSet::new();
    let pending: Vec<&Card> = targets
        .iter()
        .filter(|card| card.needs_image())
        .filter(|card| seen.insert(CardKey::of(card)))
        .collect();
    let total = pending.len();
    if total == 0 {
        return BackfillStats::default();
    }
    log::info!("Looking up images for {} cards", total);

    let mut stream = stream::iter(pending)
        .map(|card| async move {
            let series = (!card.series.is_empty()).then_some(card.series.as_str());
            let url = match tokio::time::timeout(options.timeout, lookup.search(&card.name, series)).await {
                Ok(Ok(candidates)) => match candidates.into_iter().next() {
                    Some(candidate) => Some(candidate.image_url),
                    None => {
                        log::warn!("No image found for '{}' ({})", card.name, card.series);
                        None
                    }
                },
                Ok(Err(e)) => {
                    log::warn!("Image lookup failed for '{}': {}", card.name, e);
                    None
                }
                Err(_elapsed) => {
                    log::warn!(
                        "Image lookup for '{}' timed out after {}s",
                        card.name,
                        options.timeout.as_secs_f32()
                    );
                    None
                }
            };
            (card, url)
        })
        .buffer_unordered(options.concurrency.max(1));

    let mut resolved: HashMap<CardKey, String> = HashMap::new();
    let mut stats = BackfillStats::default();
    let mut done = 0;
    while let Some((card, url)) = stream.next().await {
        done += 1;
        progress.on_image(done, total, &card.name);
        match url {
            Some(url) => {
                stats.resolved += 1;
                resolved.insert(CardKey::of(card), url);
            }
            None => {
                stats.placeholders += 1;
                resolved.insert(CardKey::of(card), PLACEHOLDER_IMAGE.to_string());
            }
        }
    }

    for card in collection.iter_mut() {
        if let Some(url) = resolved.get(&CardKey::of(card)) {
            if card.needs_image() {
                card.image_url = url.clone();
            }
        }
    }
    stats
}
