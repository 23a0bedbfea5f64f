//! Token issuance and validation handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::ValidateTokenRequest;
use crate::dto::response::{ApiResponse, TokenOwnerResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/tokens
pub async fn issue_token(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let token = state.token_service.issue(&auth).await?;
    Ok(Json(ApiResponse::ok(token.into())))
}

/// POST /api/tokens/validate
pub async fn validate_token(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ValidateTokenRequest>,
) -> Result<Json<ApiResponse<TokenOwnerResponse>>, ApiError> {
    let user_id = state.token_service.validate(&auth, &req.token).await?;
    Ok(Json(ApiResponse::ok(TokenOwnerResponse { user_id })))
}
