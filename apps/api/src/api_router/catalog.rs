use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, put};

use crate::handlers::catalog;
use crate::middleware::{self, RateLimitGuard};
use crate::state::AppState;

/// Catalog CRUD. Reads are unthrottled; writes use the catalog rule.
pub(super) fn build_catalog_routes(app_state: &AppState) -> Router<AppState> {
    let guard = RateLimitGuard::new(app_state, app_state.rate_limits.catalog_writes.clone());
    let write_limit = || from_fn_with_state(guard.clone(), middleware::rate_limit);

    Router::new()
        .route(
            "/api/authors/",
            get(catalog::list_authors_handler)
                .merge(post(catalog::create_author_handler).route_layer(write_limit())),
        )
        .route(
            "/api/authors/{author_id}/",
            get(catalog::get_author_handler).merge(
                put(catalog::replace_author_handler)
                    .patch(catalog::patch_author_handler)
                    .delete(catalog::delete_author_handler)
                    .route_layer(write_limit()),
            ),
        )
        .route(
            "/api/publishers/",
            get(catalog::list_publishers_handler)
                .merge(post(catalog::create_publisher_handler).route_layer(write_limit())),
        )
        .route(
            "/api/publishers/{publisher_id}/",
            get(catalog::get_publisher_handler).merge(
                put(catalog::replace_publisher_handler)
                    .patch(catalog::patch_publisher_handler)
                    .delete(catalog::delete_publisher_handler)
                    .route_layer(write_limit()),
            ),
        )
        .route(
            "/api/books/",
            get(catalog::list_books_handler)
                .merge(post(catalog::create_book_handler).route_layer(write_limit())),
        )
        .route(
            "/api/books/{book_id}/",
            get(catalog::get_book_handler).merge(
                put(catalog::replace_book_handler)
                    .patch(catalog::patch_book_handler)
                    .delete(catalog::delete_book_handler)
                    .route_layer(write_limit()),
            ),
        )
        .route_layer(from_fn(middleware::require_auth))
}
