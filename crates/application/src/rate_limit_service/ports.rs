use async_trait::async_trait;

use folio_core::AppResult;

/// Shared key/value store holding request counters.
///
/// Implementations own expiry: an entry disappears `ttl_seconds` after the
/// last `set`. Per-key `get`/`set` must be safe under concurrent access;
/// no atomic read-modify-write is required.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Returns the current count for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> AppResult<Option<u64>>;

    /// Stores `count` for `key`, expiring `ttl_seconds` from now.
    async fn set(&self, key: &str, count: u64, ttl_seconds: u64) -> AppResult<()>;
}
