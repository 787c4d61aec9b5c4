//! Redis-backed counter store.

use async_trait::async_trait;
use folio_application::CounterStore;
use folio_core::{AppError, AppResult};
use redis::AsyncCommands;
use tracing::warn;

/// Redis implementation of the counter store port.
///
/// Counts are plain integer values written with `SET .. EX`, so Redis
/// expires idle windows on its own.
#[derive(Clone)]
pub struct RedisCounterStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisCounterStore {
    /// Creates a store with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}:{key}", self.key_prefix)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| {
                warn!(error = %error, "rate limit counter store is unreachable");
                AppError::Unavailable(format!("failed to connect to redis: {error}"))
            })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get(&self, key: &str) -> AppResult<Option<u64>> {
        let mut connection = self.connection().await?;

        connection.get(self.key_for(key)).await.map_err(|error| {
            AppError::Unavailable(format!("failed to read rate limit counter: {error}"))
        })
    }

    async fn set(&self, key: &str, count: u64, ttl_seconds: u64) -> AppResult<()> {
        let mut connection = self.connection().await?;

        connection
            .set_ex(self.key_for(key), count, ttl_seconds)
            .await
            .map_err(|error| {
                AppError::Unavailable(format!("failed to write rate limit counter: {error}"))
            })
    }
}
