use std::fmt::{Debug, Formatter};
use std::net::IpAddr;
use std::sync::Arc;

use folio_core::{AppResult, UserIdentity};
use folio_domain::{RateLimitKey, RateLimitPolicy};

/// Caller-supplied key derivation. Its output is used verbatim.
pub type KeyFunc = Arc<dyn Fn(&RateLimitRequest) -> RateLimitKey + Send + Sync>;

/// The parts of an incoming request the limiter can key on.
#[derive(Debug, Clone, Default)]
pub struct RateLimitRequest {
    /// Authenticated caller, if any.
    pub identity: Option<UserIdentity>,
    /// Resolved client address, if any.
    pub ip_address: Option<IpAddr>,
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
}

impl RateLimitRequest {
    /// Creates a request description for the given method and path.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Attaches the authenticated identity.
    #[must_use]
    pub fn with_identity(mut self, identity: UserIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Attaches the client address.
    #[must_use]
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Default key: `user:<id>`, else `ip:<address>`, else `anon`.
    #[must_use]
    pub fn default_key(&self) -> RateLimitKey {
        RateLimitKey::derive(self.identity.as_ref(), self.ip_address)
    }
}

/// Rate limit configuration attached to an endpoint at registration time.
#[derive(Clone, Default)]
pub struct RateLimitRule {
    policy: RateLimitPolicy,
    key_func: Option<KeyFunc>,
}

impl RateLimitRule {
    /// Creates a rule with the default key derivation.
    pub fn new(limit: u32, period_seconds: u64) -> AppResult<Self> {
        Ok(Self {
            policy: RateLimitPolicy::new(limit, period_seconds)?,
            key_func: None,
        })
    }

    /// Creates a rule from an already validated policy.
    #[must_use]
    pub fn from_policy(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            key_func: None,
        }
    }

    /// Replaces the default key derivation.
    #[must_use]
    pub fn with_key_func<F>(mut self, key_func: F) -> Self
    where
        F: Fn(&RateLimitRequest) -> RateLimitKey + Send + Sync + 'static,
    {
        self.key_func = Some(Arc::new(key_func));
        self
    }

    /// Returns the limit and period.
    #[must_use]
    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Derives the counter key for a request.
    #[must_use]
    pub fn key_for(&self, request: &RateLimitRequest) -> RateLimitKey {
        match &self.key_func {
            Some(key_func) => key_func(request),
            None => request.default_key(),
        }
    }
}

impl Debug for RateLimitRule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RateLimitRule")
            .field("policy", &self.policy)
            .field("custom_key", &self.key_func.is_some())
            .finish()
    }
}
