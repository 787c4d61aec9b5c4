use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};

use crate::auth;
use crate::middleware::{self, RateLimitGuard};
use crate::state::AppState;

/// Account routes share one rule and the default key derivation, so a
/// caller's budget is spent across all of them.
pub(super) fn build_account_routes(app_state: &AppState) -> Router<AppState> {
    let guard = RateLimitGuard::new(app_state, app_state.rate_limits.accounts.clone());

    let public_routes = Router::new()
        .route("/api/register/", post(auth::register_handler))
        .route("/api/login/", post(auth::login_handler))
        .route("/api/token/refresh/", post(auth::refresh_handler))
        .route_layer(from_fn_with_state(guard.clone(), middleware::rate_limit));

    let protected_routes = Router::new()
        .route("/api/protected/", get(auth::protected_handler))
        .route_layer(from_fn_with_state(guard, middleware::rate_limit))
        .route_layer(from_fn(middleware::require_auth));

    public_routes.merge(protected_routes)
}
