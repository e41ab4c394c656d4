use karuta_catalog::Card;
use tokio::sync::Mutex;

use crate::CollectionStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct State {
    cards: Option<Vec<Card>>,
    writes: usize,
}

/// In-process collection store, optionally capped at a number of cards.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    max_cards: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse writes that would hold more than `max_cards` cards.
    pub fn with_capacity(max_cards: usize) -> Self {
        Self {
            max_cards: Some(max_cards),
            ..Self::default()
        }
    }

    /// A store that starts out holding `cards`.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            state: Mutex::new(State {
                cards: Some(cards),
                writes: 0,
            }),
            max_cards: None,
        }
    }

    /// Number of successful `save`/`append` calls so far.
    pub async fn writes(&self) -> usize {
        self.state.lock().await.writes
    }

    fn check(&self, total: usize) -> Result<(), StoreError> {
        match self.max_cards {
            Some(max) if total > max => Err(StoreError::capacity(total as u64, max as u64)),
            _ => Ok(()),
        }
    }
}

impl CollectionStore for MemoryStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.state.lock().await.cards.is_some())
    }

    async fn load(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.state.lock().await.cards.clone().unwrap_or_default())
    }

    async fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        self.check(cards.len())?;
        let mut state = self.state.lock().await;
        state.cards = Some(cards.to_vec());
        state.writes += 1;
        Ok(())
    }

    async fn append(&self, cards: &[Card]) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        let current = state.cards.as_ref().map_or(0, Vec::len);
        self.check(current + cards.len())?;
        let stored = state.cards.get_or_insert_with(Vec::new);
        stored.extend_from_slice(cards);
        let total = stored.len();
        state.writes += 1;
        Ok(total)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.state.lock().await.cards = None;
        Ok(())
    }
}
