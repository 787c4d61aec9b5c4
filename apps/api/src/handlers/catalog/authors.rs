use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use folio_domain::AuthorId;

use crate::dto::{AuthorPatchRequest, AuthorRequest, AuthorResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_authors_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AuthorResponse>>> {
    let authors = state
        .catalog_service
        .list_authors()
        .await?
        .into_iter()
        .map(AuthorResponse::from)
        .collect();

    Ok(Json(authors))
}

pub async fn create_author_handler(
    State(state): State<AppState>,
    Json(payload): Json<AuthorRequest>,
) -> ApiResult<(StatusCode, Json<AuthorResponse>)> {
    let author = state.catalog_service.create_author(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(AuthorResponse::from(author))))
}

pub async fn get_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> ApiResult<Json<AuthorResponse>> {
    let author = state
        .catalog_service
        .get_author(AuthorId::new(author_id))
        .await?;

    Ok(Json(AuthorResponse::from(author)))
}

pub async fn replace_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(payload): Json<AuthorRequest>,
) -> ApiResult<Json<AuthorResponse>> {
    let author = state
        .catalog_service
        .replace_author(AuthorId::new(author_id), payload.into())
        .await?;

    Ok(Json(AuthorResponse::from(author)))
}

pub async fn patch_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(payload): Json<AuthorPatchRequest>,
) -> ApiResult<Json<AuthorResponse>> {
    let author = state
        .catalog_service
        .patch_author(AuthorId::new(author_id), payload.into())
        .await?;

    Ok(Json(AuthorResponse::from(author)))
}

pub async fn delete_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .catalog_service
        .delete_author(AuthorId::new(author_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
