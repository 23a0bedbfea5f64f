//! `AuthUser` extractor — reads the verified caller identity from the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use smartpark_core::error::AppError;
use smartpark_core::types::UserId;
use smartpark_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the verified caller identity.
///
/// Identity verification happens upstream of this service; the gateway
/// strips any client-supplied value and injects the verified one.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted caller context available in handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing x-user-id header"))?;

        let user_id: UserId = header
            .parse()
            .map_err(|_| AppError::unauthenticated("Invalid x-user-id header"))?;

        Ok(AuthUser(RequestContext::new(user_id)))
    }
}
