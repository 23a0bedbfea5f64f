//! Parking lot handlers.

use axum::Json;
use axum::extract::{Path, State};

use smartpark_core::types::LotId;
use smartpark_entity::lot::CreateParkingLot;

use crate::dto::request::CreateLotRequest;
use crate::dto::response::{ApiResponse, LotResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/lots
pub async fn create_lot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateLotRequest>,
) -> Result<Json<ApiResponse<LotResponse>>, ApiError> {
    let lot = state
        .lot_service
        .create_lot(
            &auth,
            CreateParkingLot {
                name: req.name,
                max_capacity: req.max_capacity,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(lot.into())))
}

/// GET /api/lots
pub async fn list_lots(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<LotResponse>>>, ApiError> {
    let lots = state.lot_service.list_lots().await?;
    Ok(Json(ApiResponse::ok(
        lots.into_iter().map(LotResponse::from).collect(),
    )))
}

/// GET /api/lots/{id}
pub async fn get_lot(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<LotId>,
) -> Result<Json<ApiResponse<LotResponse>>, ApiError> {
    let lot = state.lot_service.get_lot(id).await?;
    Ok(Json(ApiResponse::ok(lot.into())))
}
