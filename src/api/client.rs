//! PokeAPI Client
//!
//! Fetches listing pages over HTTP, memoizing raw response bodies in a
//! [`TimedCache`] keyed by request URL.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

/// HTTP client for the PokeAPI, backed by a response cache.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: Client,
    cache: Arc<TimedCache>,
    base_url: String,
}

impl PokeClient {
    /// Creates a client rooted at `base_url` that stores bodies in `cache`.
    pub fn new(
        base_url: impl Into<String>,
        cache: Arc<TimedCache>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            cache,
            base_url,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: Arc<TimedCache>) -> Result<Self> {
        Self::new(config.base_url.clone(), cache, config.http_timeout())
    }

    /// URL of the first `location-area` page.
    pub fn location_area_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn cache(&self) -> &Arc<TimedCache> {
        &self.cache
    }

    /// Returns the body for `url`, from cache when present.
    ///
    /// On a miss the body is fetched, stored under `url` and returned.
    /// Non-success responses are reported as errors and never cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;

        Ok(body)
    }

    /// Fetches and decodes one page of the `location-area` listing.
    ///
    /// `None` requests the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match url {
            Some(url) => url.to_string(),
            None => self.location_area_url(),
        };

        let body = self.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
