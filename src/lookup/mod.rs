//! Lookup Module
//!
//! Cache-aside dictionary lookup: read the store, fall back to the upstream
//! dictionary on a miss, then write the fresh result back best-effort.
//!
//! Keys are the literal query word. Concurrent misses for the same word are
//! not coalesced; each calls upstream and the last write wins.

mod stats;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::KvStore;
use crate::error::{LookupError, StoreError};
use crate::models::LookupResult;
use crate::upstream::Dictionary;

pub use stats::{LookupStats, StatsSnapshot};

// == Lookup Service ==
/// Shared lookup handle. Cloning is cheap; all clones share the store
/// client, the upstream client and the counters.
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn KvStore>,
    dictionary: Arc<dyn Dictionary>,
    stats: Arc<LookupStats>,
}

impl LookupService {
    pub fn new(store: Arc<dyn KvStore>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            store,
            dictionary,
            stats: Arc::new(LookupStats::new()),
        }
    }

    /// Current counter values.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Lookup ==
    /// Looks up `word`, serving from the store when possible.
    ///
    /// A cached value is trusted as-is. On a miss the upstream is queried;
    /// when `use_cache` is set and the upstream reports success, the result
    /// is written back. A failed write never fails the lookup. Results whose
    /// status is not a success come back with no entries.
    pub async fn lookup(&self, word: &str, use_cache: bool) -> Result<LookupResult, LookupError> {
        info!("Querying Jisho for \"{}\"", word);

        if let Some(cached) = self.cached(word).await? {
            return Ok(cached.normalized());
        }

        self.stats.record_upstream_call();
        let result = self.dictionary.search(word).await?;

        if use_cache && result.is_ok() {
            self.write_back(word, &result).await;
        }

        Ok(result.normalized())
    }

    // == Store Result ==
    /// Writes `result` to the store under `word`.
    pub async fn store_result(&self, word: &str, result: &LookupResult) -> Result<(), StoreError> {
        let json = serde_json::to_string(result)?;
        self.store.set(word, &json).await
    }

    async fn cached(&self, word: &str) -> Result<Option<LookupResult>, LookupError> {
        let Some(raw) = self.store.get(word).await? else {
            debug!("cache miss for \"{}\"", word);
            self.stats.record_miss();
            return Ok(None);
        };

        let cached = serde_json::from_str(&raw).map_err(|e| LookupError::CorruptEntry {
            key: word.to_string(),
            reason: e.to_string(),
        })?;

        debug!("cache hit for \"{}\"", word);
        self.stats.record_hit();
        Ok(Some(cached))
    }

    async fn write_back(&self, word: &str, result: &LookupResult) {
        match self.store_result(word, result).await {
            Ok(()) => {
                self.stats.record_write();
                debug!("cached Jisho result for \"{}\"", word);
            }
            Err(e) => {
                self.stats.record_write_failure();
                warn!(error = %e, "failed to cache Jisho result for \"{}\"", word);
            }
        }
    }
}
