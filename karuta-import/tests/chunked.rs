use std::cell::RefCell;

use karuta_catalog::{Card, PLACEHOLDER_IMAGE};
use karuta_import::*;
use karuta_store::{CollectionStore, MemoryStore};

/// Records every progress callback.
#[derive(Default)]
struct Recorder {
    chunks: RefCell<Vec<(usize, usize)>>,
}

impl ImportProgress for Recorder {
    fn on_chunk(&self, processed: usize, total: usize) {
        self.chunks.borrow_mut().push((processed, total));
    }
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

fn cards(range: std::ops::Range<usize>) -> Vec<Card> {
    range
        .map(|i| Card::new(&format!("c{i:03}"), &format!("Character {i}"), "Series"))
        .collect()
}

#[tokio::test]
async fn merge_chunks_report_cumulative_progress() {
    let store = MemoryStore::new();
    let progress = Recorder::default();
    let incoming = cards(0..120);

    let outcome = import_chunked(
        &store,
        Vec::new(),
        &incoming,
        MergeMode::Merge,
        &ChunkOptions::default(),
        &progress,
    )
    .await
    .unwrap();

    assert_eq!(*progress.chunks.borrow(), [(50, 120), (100, 120), (120, 120)]);
    assert_eq!(outcome.stats.added, 120);
    assert_eq!(outcome.added.len(), 120);
    assert_eq!(store.writes().await, 3);
    assert_eq!(store.load().await.unwrap(), outcome.collection);
}

#[tokio::test]
async fn chunked_merge_matches_single_merge() {
    let mut existing = cards(0..10);
    existing[3].image_url = "kept".into();

    let mut incoming = cards(5..25);
    incoming[0].quality = "★★★★".into();
    // c008 appears twice; the later copy changes it.
    let mut dup = incoming[3].clone();
    dup.tag = "late".into();
    incoming.push(dup);

    let whole = merge(&existing, &incoming, MergeMode::Merge);
    let chunked = import_chunked(
        &MemoryStore::new(),
        existing.clone(),
        &incoming,
        MergeMode::Merge,
        &ChunkOptions { chunk_size: 4 },
        &SilentProgress,
    )
    .await
    .unwrap();

    assert_eq!(chunked.collection, whole.collection);
    assert_eq!(chunked.stats, whole.stats);
    assert_eq!(chunked.stats.removed, 5);
    assert_eq!(chunked.stats.updated, 2);
    assert_eq!(chunked.added, whole.added);
}

#[tokio::test]
async fn key_added_then_changed_in_later_chunk_counts_once() {
    let first = cards(0..1);
    let mut again = first[0].clone();
    again.tag = "changed".into();
    let incoming = vec![first[0].clone(), again];

    let outcome = import_chunked(
        &MemoryStore::new(),
        Vec::new(),
        &incoming,
        MergeMode::Merge,
        &ChunkOptions { chunk_size: 1 },
        &SilentProgress,
    )
    .await
    .unwrap();

    assert_eq!(outcome.stats, MergeStats { added: 1, ..MergeStats::default() });
    assert_eq!(outcome.added[0].tag, "changed");
}

#[tokio::test]
async fn replace_saves_then_appends() {
    let store = MemoryStore::with_cards(cards(100..105));
    let incoming = cards(0..7);

    let outcome = import_chunked(
        &store,
        Vec::new(),
        &incoming,
        MergeMode::Replace,
        &ChunkOptions { chunk_size: 3 },
        &SilentProgress,
    )
    .await
    .unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 7);
    assert_eq!(stored, outcome.collection);
    assert!(stored.iter().all(|c| c.image_url == PLACEHOLDER_IMAGE));
    assert_eq!(store.writes().await, 3);
    assert_eq!(outcome.stats.added, 7);
}

#[tokio::test]
async fn capacity_failure_keeps_committed_chunks() {
    let store = MemoryStore::with_capacity(25);
    let progress = Recorder::default();
    let incoming = cards(0..40);

    let err = import_chunked(
        &store,
        Vec::new(),
        &incoming,
        MergeMode::Merge,
        &ChunkOptions { chunk_size: 10 },
        &progress,
    )
    .await
    .unwrap_err();

    match err {
        ImportError::StorageExhausted { committed, total, source } => {
            assert_eq!(committed, 20);
            assert_eq!(total, 40);
            assert!(source.is_capacity());
        }
        other => panic!("expected StorageExhausted, got {other:?}"),
    }
    assert_eq!(*progress.chunks.borrow(), [(10, 40), (20, 40)]);
    assert_eq!(store.load().await.unwrap(), cards(0..20));
}

#[tokio::test]
async fn replace_capacity_failure_is_exhausted() {
    let store = MemoryStore::with_capacity(4);
    let err = import_chunked(
        &store,
        Vec::new(),
        &cards(0..6),
        MergeMode::Replace,
        &ChunkOptions { chunk_size: 3 },
        &SilentProgress,
    )
    .await
    .unwrap_err();

    assert!(err.is_storage_exhausted());
    assert_eq!(store.load().await.unwrap().len(), 3);
}

#[tokio::test]
async fn zero_chunk_size_still_progresses() {
    let progress = Recorder::default();
    import_chunked(
        &MemoryStore::new(),
        Vec::new(),
        &cards(0..2),
        MergeMode::Merge,
        &ChunkOptions { chunk_size: 0 },
        &progress,
    )
    .await
    .unwrap();
    assert_eq!(*progress.chunks.borrow(), [(1, 2), (2, 2)]);
}
