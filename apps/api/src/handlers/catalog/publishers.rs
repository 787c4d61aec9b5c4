use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use folio_domain::PublisherId;

use crate::dto::{PublisherPatchRequest, PublisherRequest, PublisherResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_publishers_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PublisherResponse>>> {
    let publishers = state
        .catalog_service
        .list_publishers()
        .await?
        .into_iter()
        .map(PublisherResponse::from)
        .collect();

    Ok(Json(publishers))
}

pub async fn create_publisher_handler(
    State(state): State<AppState>,
    Json(payload): Json<PublisherRequest>,
) -> ApiResult<(StatusCode, Json<PublisherResponse>)> {
    let publisher = state
        .catalog_service
        .create_publisher(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(PublisherResponse::from(publisher))))
}

pub async fn get_publisher_handler(
    State(state): State<AppState>,
    Path(publisher_id): Path<i64>,
) -> ApiResult<Json<PublisherResponse>> {
    let publisher = state
        .catalog_service
        .get_publisher(PublisherId::new(publisher_id))
        .await?;

    Ok(Json(PublisherResponse::from(publisher)))
}

pub async fn replace_publisher_handler(
    State(state): State<AppState>,
    Path(publisher_id): Path<i64>,
    Json(payload): Json<PublisherRequest>,
) -> ApiResult<Json<PublisherResponse>> {
    let publisher = state
        .catalog_service
        .replace_publisher(PublisherId::new(publisher_id), payload.into())
        .await?;

    Ok(Json(PublisherResponse::from(publisher)))
}

pub async fn patch_publisher_handler(
    State(state): State<AppState>,
    Path(publisher_id): Path<i64>,
    Json(payload): Json<PublisherPatchRequest>,
) -> ApiResult<Json<PublisherResponse>> {
    let publisher = state
        .catalog_service
        .patch_publisher(PublisherId::new(publisher_id), payload.into())
        .await?;

    Ok(Json(PublisherResponse::from(publisher)))
}

pub async fn delete_publisher_handler(
    State(state): State<AppState>,
    Path(publisher_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .catalog_service
        .delete_publisher(PublisherId::new(publisher_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
