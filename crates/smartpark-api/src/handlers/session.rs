//! Session check-in/check-out handlers.

use axum::Json;
use axum::extract::{Path, State};

use smartpark_core::types::{LotId, SessionId};

use crate::dto::response::{ApiResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/lots/{id}/check-in
pub async fn check_in(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(lot_id): Path<LotId>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    let session = state.session_manager.check_in(&auth, lot_id).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}

/// POST /api/sessions/{id}/check-out
pub async fn check_out(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(session_id): Path<SessionId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.check_out(&auth, session_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Checked out".to_string(),
    })))
}

/// GET /api/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(session_id): Path<SessionId>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    let session = state.session_manager.get_session(session_id).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}
