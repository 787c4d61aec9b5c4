//! Account endpoints: registration, token login/refresh and the protected
//! greeting.

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use folio_application::AuthOutcome;
use folio_core::{AppError, UserIdentity};

use crate::dto::{
    AccessTokenResponse, LoginRequest, MessageResponse, RefreshRequest, RegisterRequest,
    TokenPairResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

const LOGIN_FAILED: &str = "No active account found with the given credentials";

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.user_service.register(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully.")),
    ))
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    match state
        .user_service
        .login(&payload.username, &payload.password)
        .await?
    {
        AuthOutcome::Authenticated(pair) => Ok(Json(TokenPairResponse::from(pair))),
        AuthOutcome::Failed => Err(AppError::Unauthorized(LOGIN_FAILED.to_owned()).into()),
    }
}

pub async fn refresh_handler(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> ApiResult<Json<AccessTokenResponse>> {
    let access = state.user_service.refresh(&payload.refresh).await?;

    Ok(Json(AccessTokenResponse { access }))
}

pub async fn protected_handler(
    Extension(user): Extension<UserIdentity>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Hello, {}! This is a protected route.",
        user.username()
    )))
}
