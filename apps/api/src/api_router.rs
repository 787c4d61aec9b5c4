use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use folio_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod accounts;
mod catalog;
mod cors;


/// Builds the HTTP router.
///
/// Layer order on `/api` routes, outermost first: bearer authentication,
/// `require_auth` where needed, then the route's rate limit.
pub fn build_router(
    app_state: AppState,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .merge(accounts::build_account_routes(&app_state))
        .merge(catalog::build_catalog_routes(&app_state))
        .layer(from_fn_with_state(
            app_state.clone(),
            middleware::authenticate,
        ));

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_allowed_origin {
        router = router.layer(cors::build_cors_layer(origin)?);
    }

    Ok(router.with_state(app_state))
}
