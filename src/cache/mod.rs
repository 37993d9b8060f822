//! Cache Module
//!
//! Key-value store seam used by the lookup path, with a Redis backend for
//! production and an in-memory backend.

mod memory;
mod redis_store;

use async_trait::async_trait;

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Key-Value Store ==
/// Opaque string key-value store. Keys are used exactly as given.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value. No expiry.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
