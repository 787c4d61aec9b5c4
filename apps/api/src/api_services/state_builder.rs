use std::sync::Arc;

use folio_application::{CatalogService, UserService};
use folio_core::AppError;
use folio_infrastructure::{Argon2PasswordHasher, JwtTokenIssuer};

use crate::api_config::ApiConfig;
use crate::middleware::ClientIpSource;
use crate::state::AppState;

mod rate_limits;
mod repositories;

pub use rate_limits::build_rate_limit_rules;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let repositories = repositories::build_repository_set(config).await?;
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        &config.jwt_secret,
        config.jwt_access_ttl_seconds,
        config.jwt_refresh_ttl_seconds,
    )?);

    Ok(AppState {
        user_service: UserService::new(
            repositories.user_repository,
            Arc::new(Argon2PasswordHasher::new()),
            token_issuer,
        ),
        catalog_service: CatalogService::new(
            repositories.author_repository,
            repositories.publisher_repository,
            repositories.book_repository,
        ),
        rate_limit_service: rate_limits::build_rate_limit_service(config)?,
        rate_limits: build_rate_limit_rules(config)?,
        client_ip: if config.trust_proxy_headers {
            ClientIpSource::ForwardedFor
        } else {
            ClientIpSource::PeerAddress
        },
    })
}
