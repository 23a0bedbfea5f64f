//! Parking session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartpark_core::types::{LotId, SessionId, UserId};

use super::status::SessionStatus;

/// One user's occupancy interval at a lot, from check-in to check-out.
///
/// Created only by a successful check-in transaction; moved to
/// `Completed` only by a successful check-out transaction; immutable
/// thereafter. Every `Active` session corresponds to exactly one
/// occupancy increment that has not yet been offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// The user who checked in.
    pub user_id: UserId,
    /// The lot the session occupies.
    pub lot_id: LotId,
    /// Lifecycle state.
    pub status: SessionStatus,
    /// When the vehicle checked in.
    pub checked_in_at: DateTime<Utc>,
    /// When the vehicle checked out. Absent while the session is active.
    pub checked_out_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session still holds an occupancy slot.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}
