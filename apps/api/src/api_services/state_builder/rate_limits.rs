use std::sync::Arc;

use folio_application::{CounterStore, RateLimitRule, RateLimitService};
use folio_core::AppResult;
use folio_domain::RateLimitKey;
use folio_infrastructure::{InMemoryCounterStore, RedisCounterStore};

use crate::api_config::{ApiConfig, RateLimitStoreConfig};
use crate::api_services::build_redis_client;
use crate::state::RateLimitRules;

pub(super) fn build_rate_limit_service(config: &ApiConfig) -> AppResult<RateLimitService> {
    let counter_store: Arc<dyn CounterStore> = match &config.rate_limit_store {
        RateLimitStoreConfig::Memory => Arc::new(InMemoryCounterStore::new()),
        RateLimitStoreConfig::Redis { redis_url } => Arc::new(RedisCounterStore::new(
            build_redis_client(redis_url)?,
            "folio:rate_limit",
        )),
    };

    Ok(RateLimitService::new(counter_store))
}

/// Builds the account and catalog-write rules from configuration.
pub fn build_rate_limit_rules(config: &ApiConfig) -> AppResult<RateLimitRules> {
    let accounts =
        RateLimitRule::new(config.rate_limit_requests, config.rate_limit_period_seconds)?;
    let catalog_writes = RateLimitRule::new(
        config.catalog_rate_limit_requests,
        config.rate_limit_period_seconds,
    )?
    .with_key_func(|request| RateLimitKey::custom(format!("catalog:{}", request.default_key())));

    Ok(RateLimitRules {
        accounts,
        catalog_writes,
    })
}
