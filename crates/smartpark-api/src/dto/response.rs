//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartpark_core::types::{LotId, SessionId, UserId};
use smartpark_entity::lot::ParkingLot;
use smartpark_entity::session::{Session, SessionStatus};
use smartpark_entity::token::AuthToken;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Parking lot summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotResponse {
    /// Lot ID.
    pub id: LotId,
    /// Display name.
    pub name: String,
    /// Occupancy ceiling.
    pub max_capacity: u32,
    /// Committed occupancy.
    pub current_occupancy: u32,
    /// Remaining free slots.
    pub available: u32,
    /// Registration instant.
    pub created_at: DateTime<Utc>,
}

impl From<ParkingLot> for LotResponse {
    fn from(lot: ParkingLot) -> Self {
        Self {
            available: lot.available(),
            id: lot.id,
            name: lot.name,
            max_capacity: lot.max_capacity,
            current_occupancy: lot.current_occupancy,
            created_at: lot.created_at,
        }
    }
}

/// Parking session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session ID.
    pub id: SessionId,
    /// Owning user.
    pub user_id: UserId,
    /// Lot the session occupies.
    pub lot_id: LotId,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Check-in instant.
    pub checked_in_at: DateTime<Utc>,
    /// Check-out instant, once completed.
    pub checked_out_at: Option<DateTime<Utc>>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            lot_id: session.lot_id,
            status: session.status,
            checked_in_at: session.checked_in_at,
            checked_out_at: session.checked_out_at,
        }
    }
}

/// Freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The token value.
    pub token: String,
    /// Absolute expiry instant.
    pub expires_at: DateTime<Utc>,
}

impl From<AuthToken> for TokenResponse {
    fn from(token: AuthToken) -> Self {
        Self {
            token: token.value,
            expires_at: token.expires_at,
        }
    }
}

/// Result of consuming a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenOwnerResponse {
    /// The user the token was issued to.
    pub user_id: UserId,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store status.
    pub store: String,
}
