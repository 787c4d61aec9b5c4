use std::future::Future;
use std::sync::Arc;

use folio_core::AppResult;
use folio_domain::{RateLimitExceeded, RateLimitKey};
use tracing::{debug, warn};

use super::config::{RateLimitRequest, RateLimitRule};
use super::ports::CounterStore;

/// Result of checking one request against its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request may proceed; `count` is the stored count including it.
    Admitted {
        /// Requests counted in the current window.
        count: u64,
    },
    /// The window is exhausted.
    Rejected(RateLimitExceeded),
}

/// Result of running a handler behind the limiter.
#[derive(Debug)]
pub enum RateLimitOutcome<T> {
    /// The handler ran and produced `T`.
    Admitted(T),
    /// The handler was not invoked.
    Rejected(RateLimitExceeded),
}

/// Application service for rate limiting.
#[derive(Clone)]
pub struct RateLimitService {
    store: Arc<dyn CounterStore>,
}

impl RateLimitService {
    /// Creates a rate limit service over the given counter store.
    #[must_use]
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Derives the counter key for a request under `rule`.
    #[must_use]
    pub fn key_for(&self, rule: &RateLimitRule, request: &RateLimitRequest) -> RateLimitKey {
        rule.key_for(request)
    }

    /// Checks `key` against the rule's policy and records the request when
    /// admitted.
    ///
    /// Performs one store read and, only on admission, one store write of
    /// `count + 1` with a time-to-live of `period` seconds. The read and
    /// write are separate calls, so concurrent requests for one key may both
    /// be admitted on the same count. Store errors are returned unchanged.
    pub async fn admit(&self, rule: &RateLimitRule, key: &RateLimitKey) -> AppResult<Admission> {
        let policy = rule.policy();
        let count = self.store.get(key.as_str()).await?.unwrap_or(0);

        if count >= u64::from(policy.limit()) {
            warn!(
                key = %key,
                count,
                limit = policy.limit(),
                period_seconds = policy.period_seconds(),
                "rate limit exceeded"
            );
            return Ok(Admission::Rejected(policy.exceeded()));
        }

        let count = count + 1;
        self.store
            .set(key.as_str(), count, policy.period_seconds())
            .await?;
        debug!(key = %key, count, limit = policy.limit(), "request admitted");

        Ok(Admission::Admitted { count })
    }

    /// Runs `handler` only if the request is admitted.
    ///
    /// The key comes from the rule's key function when set, otherwise from
    /// the request identity or address. The handler output is returned
    /// unmodified.
    pub async fn guard<F, Fut, T>(
        &self,
        rule: &RateLimitRule,
        request: &RateLimitRequest,
        handler: F,
    ) -> AppResult<RateLimitOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let key = self.key_for(rule, request);

        match self.admit(rule, &key).await? {
            Admission::Admitted { .. } => Ok(RateLimitOutcome::Admitted(handler().await)),
            Admission::Rejected(exceeded) => Ok(RateLimitOutcome::Rejected(exceeded)),
        }
    }
}
