use folio_application::{CatalogService, RateLimitRule, RateLimitService, UserService};

use crate::middleware::ClientIpSource;

/// Rules attached to route groups at registration time.
#[derive(Debug, Clone)]
pub struct RateLimitRules {
    /// Default key derivation; shared by the account endpoints.
    pub accounts: RateLimitRule,
    /// Keyed `catalog:<default key>`; applied to catalog writes.
    pub catalog_writes: RateLimitRule,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub catalog_service: CatalogService,
    pub rate_limit_service: RateLimitService,
    pub rate_limits: RateLimitRules,
    pub client_ip: ClientIpSource,
}
