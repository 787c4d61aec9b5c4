//! Process-local counter store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use folio_application::CounterStore;
use folio_core::AppResult;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
struct CounterEntry {
    count: u64,
    expires_at: Instant,
}

/// In-memory counter store with per-key expiry.
///
/// Counters are not shared between processes. Expired entries read as
/// absent; every `set` sweeps all expired entries so one-off clients do
/// not accumulate.
#[derive(Default)]
pub struct InMemoryCounterStore {
    entries: RwLock<HashMap<String, CounterEntry>>,
}

impl InMemoryCounterStore {
    /// Creates an empty counter store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, key: &str) -> AppResult<Option<u64>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => return Ok(Some(entry.count)),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn set(&self, key: &str, count: u64, ttl_seconds: u64) -> AppResult<()> {
        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_seconds))
            .unwrap_or(now);

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(key.to_owned(), CounterEntry { count, expires_at });

        Ok(())
    }
}
