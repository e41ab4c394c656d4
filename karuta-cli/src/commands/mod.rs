pub(crate) mod clear;
pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod image;
pub(crate) mod import;
pub(crate) mod list;

use std::path::PathBuf;
use std::time::Duration;

use karuta_catalog::Card;
use karuta_import::BackfillOptions;
use karuta_lookup::{JikanClient, JikanConfig};
use karuta_store::{CollectionStore, JsonFileStore, Settings};
use tokio::runtime::Runtime;

use crate::CliError;

/// Settings and flags every command needs, already merged: a flag given
/// on the command line wins over `settings.toml`.
pub(crate) struct Context {
    pub settings: Settings,
    pub collection_path: PathBuf,
    pub quiet: bool,
}

impl Context {
    pub(crate) fn new(settings: Settings, collection: Option<PathBuf>, quiet: bool) -> Self {
        let collection_path = collection.unwrap_or_else(|| settings.collection_path());
        Self {
            settings,
            collection_path,
            quiet,
        }
    }

    pub(crate) fn store(&self) -> JsonFileStore {
        let store = JsonFileStore::new(self.collection_path.clone());
        match self.settings.collection.max_bytes {
            Some(max_bytes) => store.with_capacity(max_bytes),
            None => store,
        }
    }

    pub(crate) fn lookup(&self) -> Result<JikanClient, CliError> {
        let lookup = &self.settings.lookup;
        let config = JikanConfig {
            base_url: lookup.base_url.clone(),
            min_interval: Duration::from_millis(lookup.min_interval_ms),
            ..JikanConfig::default()
        };
        Ok(JikanClient::new(config)?)
    }

    pub(crate) fn backfill_options(&self, concurrency: Option<usize>) -> BackfillOptions {
        BackfillOptions {
            concurrency: concurrency.unwrap_or(self.settings.lookup.concurrency),
            timeout: Duration::from_secs(self.settings.lookup.timeout_secs),
        }
    }
}

pub(crate) fn runtime() -> Result<Runtime, CliError> {
    Runtime::new().map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

/// Load the whole collection from the configured store.
pub(crate) fn load_collection(ctx: &Context, rt: &Runtime) -> Result<Vec<Card>, CliError> {
    let cards = rt.block_on(ctx.store().load())?;
    log::debug!("Loaded {} cards from {}", cards.len(), ctx.collection_path.display());
    Ok(cards)
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
