use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use folio_domain::BookId;

use crate::dto::{BookPatchRequest, BookRequest, BookResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_books_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BookResponse>>> {
    let books = state
        .catalog_service
        .list_books()
        .await?
        .into_iter()
        .map(BookResponse::from)
        .collect();

    Ok(Json(books))
}

pub async fn create_book_handler(
    State(state): State<AppState>,
    Json(payload): Json<BookRequest>,
) -> ApiResult<(StatusCode, Json<BookResponse>)> {
    let book = state.catalog_service.create_book(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> ApiResult<Json<BookResponse>> {
    let book = state.catalog_service.get_book(BookId::new(book_id)).await?;

    Ok(Json(BookResponse::from(book)))
}

pub async fn replace_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(payload): Json<BookRequest>,
) -> ApiResult<Json<BookResponse>> {
    let book = state
        .catalog_service
        .replace_book(BookId::new(book_id), payload.into())
        .await?;

    Ok(Json(BookResponse::from(book)))
}

pub async fn patch_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(payload): Json<BookPatchRequest>,
) -> ApiResult<Json<BookResponse>> {
    let book = state
        .catalog_service
        .patch_book(BookId::new(book_id), payload.into())
        .await?;

    Ok(Json(BookResponse::from(book)))
}

pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete_book(BookId::new(book_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
