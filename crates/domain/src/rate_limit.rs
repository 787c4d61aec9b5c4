//! Rate limiting keys, policies and rejection details.
//!
//! A key identifies the unit requests are counted against. The default
//! derivation prefers the authenticated user, then the client address, and
//! finally a shared anonymous bucket.

use std::fmt::{Display, Formatter};
use std::net::IpAddr;

use folio_core::{AppError, AppResult, UserIdentity};
use serde::{Deserialize, Serialize};

/// Requests admitted per window when no limit is configured.
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 5;

/// Window length in seconds when no period is configured.
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;

/// Longest accepted window; counter stores must be able to express it as a TTL.
pub const MAX_RATE_LIMIT_PERIOD_SECONDS: u64 = 24 * 60 * 60;

const ANONYMOUS_KEY: &str = "anon";

/// Identity unit requests are counted against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateLimitKey(String);

impl RateLimitKey {
    /// Key for an authenticated user: `user:<id>`.
    #[must_use]
    pub fn for_user(user_id: i64) -> Self {
        Self(format!("user:{user_id}"))
    }

    /// Key for an unauthenticated client address: `ip:<address>`.
    #[must_use]
    pub fn for_ip(address: IpAddr) -> Self {
        Self(format!("ip:{address}"))
    }

    /// Shared key for requests with neither identity nor address.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_KEY.to_owned())
    }

    /// Key produced by a caller-supplied derivation, used verbatim.
    #[must_use]
    pub fn custom(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Default derivation: user identity, then client address, then `anon`.
    #[must_use]
    pub fn derive(identity: Option<&UserIdentity>, ip_address: Option<IpAddr>) -> Self {
        match (identity, ip_address) {
            (Some(identity), _) => Self::for_user(identity.user_id()),
            (None, Some(address)) => Self::for_ip(address),
            (None, None) => Self::anonymous(),
        }
    }

    /// Returns the key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RateLimitKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Maximum admitted requests per fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitPolicy {
    limit: u32,
    period_seconds: u64,
}

impl RateLimitPolicy {
    /// Creates a policy; both the limit and the period must be positive and
    /// the period may not exceed [`MAX_RATE_LIMIT_PERIOD_SECONDS`].
    pub fn new(limit: u32, period_seconds: u64) -> AppResult<Self> {
        if limit == 0 {
            return Err(AppError::Validation(
                "rate limit must allow at least one request".to_owned(),
            ));
        }

        if period_seconds == 0 {
            return Err(AppError::Validation(
                "rate limit period must be greater than zero".to_owned(),
            ));
        }

        if period_seconds > MAX_RATE_LIMIT_PERIOD_SECONDS {
            return Err(AppError::Validation(format!(
                "rate limit period must not exceed {MAX_RATE_LIMIT_PERIOD_SECONDS} seconds"
            )));
        }

        Ok(Self {
            limit,
            period_seconds,
        })
    }

    /// Returns the maximum number of admitted requests per window.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the window length in seconds.
    #[must_use]
    pub fn period_seconds(&self) -> u64 {
        self.period_seconds
    }

    /// Builds the rejection detail for this policy.
    #[must_use]
    pub fn exceeded(&self) -> RateLimitExceeded {
        RateLimitExceeded {
            limit: self.limit,
            period_seconds: self.period_seconds,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RATE_LIMIT_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
        }
    }
}

/// A request was rejected because its key exhausted the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitExceeded {
    /// Limit that was reached.
    pub limit: u32,
    /// Window length in seconds.
    pub period_seconds: u64,
}

impl RateLimitExceeded {
    /// Human-readable rejection message returned to clients.
    #[must_use]
    pub fn detail(&self) -> String {
        format!(
            "Rate limit exceeded. Max {} requests per {} seconds.",
            self.limit, self.period_seconds
        )
    }
}

impl Display for RateLimitExceeded {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.detail().as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use folio_core::UserIdentity;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn identity_wins_over_address() {
        let identity = UserIdentity::new(42, "reader");
        let key = RateLimitKey::derive(
            Some(&identity),
            Some(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4))),
        );
        assert_eq!(key.as_str(), "user:42");
    }

    #[test]
    fn address_is_used_without_identity() {
        let key = RateLimitKey::derive(None, Some(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4))));
        assert_eq!(key.as_str(), "ip:1.2.3.4");
    }

    #[test]
    fn ipv6_addresses_keep_their_textual_form() {
        let key = RateLimitKey::derive(None, Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(key.as_str(), "ip:::1");
    }

    #[test]
    fn missing_identity_and_address_falls_back_to_anon() {
        assert_eq!(RateLimitKey::derive(None, None).as_str(), "anon");
    }

    #[test]
    fn custom_keys_are_used_verbatim() {
        assert_eq!(RateLimitKey::custom("org:alpha").to_string(), "org:alpha");
    }

    #[test]
    fn default_policy_is_five_per_minute() {
        let policy = RateLimitPolicy::default();
        assert_eq!(policy.limit(), 5);
        assert_eq!(policy.period_seconds(), 60);
    }

    #[test]
    fn zero_limit_or_period_is_rejected() {
        assert!(RateLimitPolicy::new(0, 60).is_err());
        assert!(RateLimitPolicy::new(5, 0).is_err());
    }

    #[test]
    fn period_longer_than_a_day_is_rejected() {
        assert!(RateLimitPolicy::new(5, MAX_RATE_LIMIT_PERIOD_SECONDS).is_ok());
        assert!(matches!(
            RateLimitPolicy::new(5, MAX_RATE_LIMIT_PERIOD_SECONDS + 1),
            Err(AppError::Validation(_))
        ));
        assert!(RateLimitPolicy::new(5, u64::MAX).is_err());
    }

    #[test]
    fn exceeded_detail_names_limit_and_period() -> AppResult<()> {
        let policy = RateLimitPolicy::new(2, 60)?;
        assert_eq!(
            policy.exceeded().detail(),
            "Rate limit exceeded. Max 2 requests per 60 seconds."
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn user_keys_never_collide_with_ip_keys(
            user_id in any::<i64>(),
            octets in any::<[u8; 4]>(),
        ) {
            let identity = UserIdentity::new(user_id, "someone");
            let user_key = RateLimitKey::derive(Some(&identity), None);
            let ip_key = RateLimitKey::derive(None, Some(IpAddr::V4(Ipv4Addr::from(octets))));
            prop_assert_ne!(user_key, ip_key);
        }

        #[test]
        fn distinct_users_get_distinct_keys(first in any::<i64>(), second in any::<i64>()) {
            prop_assume!(first != second);
            prop_assert_ne!(RateLimitKey::for_user(first), RateLimitKey::for_user(second));
        }
    }
}
