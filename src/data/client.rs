//! Remote launch API client
//!
//! `LaunchApiClient` fetches the launch, rocket, and launchpad collections
//! from the SpaceX REST API and caches raw responses to avoid repeated
//! external calls. Reads are cache-first: a warm cache answers without any
//! remote round-trip, a miss costs exactly one GET and populates the cache
//! on success. Remote failures are surfaced to the caller and never cached;
//! there is no automatic retry.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::CacheManager;
use crate::config::Settings;
use crate::data::{Launch, Launchpad, Rocket};

/// Remote request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when fetching remote data
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, protocol)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Remote returned a non-success status
    #[error("Remote returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Response body was not valid JSON for the expected shape
    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for fetching launch data collections, cache-first
#[derive(Debug, Clone)]
pub struct LaunchApiClient {
    /// HTTP client for remote calls
    http_client: Client,
    /// Remote API base URL, without a trailing slash
    base_url: String,
    /// Cache for raw responses; `None` disables caching entirely
    cache: Option<CacheManager>,
    /// TTL applied to cached responses, in seconds
    cache_ttl_secs: u64,
}

impl LaunchApiClient {
    /// Creates a client from resolved settings
    ///
    /// The cache directory comes from the settings override or the XDG
    /// default. If no cache directory can be determined, caching is disabled
    /// and every call goes to the remote API.
    pub fn new(settings: &Settings) -> Self {
        let cache = if settings.no_cache {
            None
        } else {
            let cache = match settings.cache_dir.clone() {
                Some(dir) => Some(CacheManager::with_dir(dir)),
                None => CacheManager::new(),
            };
            if cache.is_none() {
                warn!("no cache directory available, caching disabled");
            }
            cache
        };

        Self {
            http_client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl_secs: settings.cache_ttl_secs,
        }
    }

    /// Fetches a logical endpoint, preferring the cache
    ///
    /// The cache key is derived deterministically from the fully-qualified
    /// URL, query string included. On a miss the remote call is made once;
    /// a successful payload is cached with the configured TTL before being
    /// returned. Failures are not cached and not retried.
    pub async fn fetch<T>(&self, endpoint: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Serialize,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let key = cache_key(&url);

        if let Some(ref cache) = self.cache {
            if let Some(value) = cache.get::<T>(&key) {
                info!(endpoint, "serving cached response");
                return Ok(value);
            }
        }

        debug!(%url, "cache miss, calling remote API");
        let response = self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = response.text().await?;
        let value: T = serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            url: url.clone(),
            source,
        })?;

        if let Some(ref cache) = self.cache {
            cache.set(&key, &value, self.cache_ttl_secs);
        }
        info!(endpoint, "serving remote response");
        Ok(value)
    }

    /// Fetches the launch collection
    pub async fn get_launches(&self) -> Result<Vec<Launch>, FetchError> {
        self.fetch("launches").await
    }

    /// Fetches the rocket collection
    pub async fn get_rockets(&self) -> Result<Vec<Rocket>, FetchError> {
        self.fetch("rockets").await
    }

    /// Fetches the launchpad collection
    pub async fn get_launchpads(&self) -> Result<Vec<Launchpad>, FetchError> {
        self.fetch("launchpads").await
    }
}

/// Derives a deterministic, filesystem-safe cache key from a full URL
///
/// Identical URLs (query string included) always map to the same key.
fn cache_key(url: &str) -> String {
    url.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
