//! Select-list lookup cache with request deduplication.
//!
//! CRUD screens populate dropdowns from backend lookup endpoints keyed by a
//! lookup name ("userGender", "logType", ...). The cache is an explicit
//! object the caller owns — not ambient module state — and coalesces
//! concurrent requests for the same name into a single fetch. Failed fetches
//! are reported to the caller and never cached.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// How long fetched options stay fresh (5 minutes).
const LOOKUP_TTL_SECS: u64 = 300;

/// Maximum number of cached lookup lists.
const LOOKUP_MAX_ENTRIES: u64 = 256;

/// One selectable option of a lookup list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOption {
    pub label: String,
    pub value: String,
}

/// A lookup fetch failed. Cloneable so every coalesced caller receives it.
#[derive(Debug, Clone, Error)]
#[error("lookup \"{name}\" failed: {message}")]
pub struct LookupError {
    pub name: String,
    pub message: String,
}

/// Backend seam producing the options for a lookup name.
#[async_trait]
pub trait LookupSource: Send + Sync {
    async fn fetch_options(&self, name: &str) -> anyhow::Result<Vec<LookupOption>>;
}

/// Caching front for a [`LookupSource`].
#[derive(Clone)]
pub struct LookupCache {
    source: Arc<dyn LookupSource>,
    cache: Cache<String, Arc<Vec<LookupOption>>>,
}

impl LookupCache {
    /// Create a cache over the given source.
    pub fn new(source: Arc<dyn LookupSource>) -> Self {
        let cache = Cache::builder()
            .max_capacity(LOOKUP_MAX_ENTRIES)
            .time_to_live(Duration::from_secs(LOOKUP_TTL_SECS))
            .build();

        Self { source, cache }
    }

    /// Options for a lookup name.
    ///
    /// Cache hits return immediately; on a miss, concurrent callers for the
    /// same name share one in-flight fetch. A failed fetch is returned as
    /// [`LookupError`] and leaves no cache entry behind.
    pub async fn options(&self, name: &str) -> Result<Arc<Vec<LookupOption>>, LookupError> {
        let source = Arc::clone(&self.source);
        let fetch = async {
            match source.fetch_options(name).await {
                Ok(options) => {
                    debug!(lookup = %name, count = options.len(), "lookup options fetched");
                    Ok(Arc::new(options))
                }
                Err(e) => {
                    warn!(lookup = %name, error = %e, "lookup fetch failed");
                    Err(LookupError {
                        name: name.to_string(),
                        message: e.to_string(),
                    })
                }
            }
        };

        self.cache
            .try_get_with(name.to_string(), fetch)
            .await
            .map_err(|e: Arc<LookupError>| (*e).clone())
    }

    /// Drop the cached options for one lookup name.
    pub async fn invalidate(&self, name: &str) {
        self.cache.invalidate(name).await;
        debug!(lookup = %name, "lookup cache invalidated");
    }
}
