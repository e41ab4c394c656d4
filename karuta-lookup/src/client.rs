use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::ImageLookup;
use crate::error::LookupError;
use crate::types::{CharacterEntry, CharacterSearchResponse, ImageCandidate};

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";
/// Jikan allows three requests per second; stay under it.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(400);
const DEFAULT_LIMIT: u32 = 5;

/// Connection settings for [`JikanClient`].
#[derive(Debug, Clone)]
pub struct JikanConfig {
    pub base_url: String,
    /// Results requested per search.
    pub limit: u32,
    /// Minimum spacing between two API requests.
    pub min_interval: Duration,
    pub timeout: Duration,
}

impl Default for JikanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            min_interval: DEFAULT_MIN_INTERVAL,
            timeout: Duration::from_secs(15),
        }
    }
}

/// HTTP client for the Jikan character search, with rate limiting.
///
/// Cloning is cheap and clones share the rate limiter.
#[derive(Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    config: JikanConfig,
    last_request: Arc<Mutex<Instant>>,
}

impl JikanClient {
    pub fn new(config: JikanConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("karuta-vault/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let now = Instant::now();
        let last = now.checked_sub(config.min_interval).unwrap_or(now);
        Ok(Self {
            http,
            config,
            last_request: Arc::new(Mutex::new(last)),
        })
    }

    pub fn config(&self) -> &JikanConfig {
        &self.config
    }

    /// Run one character search and return the raw entries.
    pub async fn search_characters(&self, query: &str) -> Result<Vec<CharacterEntry>, LookupError> {
        self.rate_limit().await;

        let limit = self.config.limit.to_string();
        let resp = self
            .http
            .get(format!("{}/characters", self.config.base_url.trim_end_matches('/')))
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("order_by", "favorites"),
                ("sort", "desc"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimit);
        }
        let text = resp.text().await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            return Err(LookupError::server(status.as_u16(), snippet));
        }

        let response: CharacterSearchResponse = serde_json::from_str(&text)?;
        log::debug!("Jikan search '{}' returned {} entries", query, response.data.len());
        Ok(response.data)
    }

    /// Wait until at least `min_interval` has passed since the last request.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < self.config.min_interval {
            tokio::time::sleep(self.config.min_interval - elapsed).await;
        }
        *last = Instant::now();
    }
}

impl ImageLookup for JikanClient {
    /// Jikan's character search has no series filter, so `series` only
    /// shows up in the logs.
    async fn search(
        &self,
        name: &str,
        series: Option<&str>,
    ) -> Result<Vec<ImageCandidate>, LookupError> {
        if let Some(series) = series {
            log::trace!("Looking up '{}' ({})", name, series);
        }
        let entries = self.search_characters(name).await?;
        Ok(rank_candidates(entries, name))
    }
}

/// Turn search entries into candidates: entries without an image are
/// dropped, exact name matches come first, then by favorites.
pub fn rank_candidates(entries: Vec<CharacterEntry>, wanted: &str) -> Vec<ImageCandidate> {
    let mut ranked: Vec<(bool, ImageCandidate)> = entries
        .into_iter()
        .filter_map(|entry| {
            let url = entry.image_url()?.to_string();
            Some((
                entry.is_exact_match(wanted),
                ImageCandidate {
                    image_url: url,
                    display_name: entry.name,
                    favorites: entry.favorites,
                },
            ))
        })
        .collect();

    ranked.sort_by(|(a_exact, a), (b_exact, b)| {
        b_exact
            .cmp(a_exact)
            .then_with(|| b.favorites.cmp(&a.favorites))
    });
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
