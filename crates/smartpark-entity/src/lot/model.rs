//! Parking lot entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartpark_core::types::LotId;

/// A capacity-bounded parking facility.
///
/// `current_occupancy` is mutated only inside session manager
/// transactions; `0 <= current_occupancy <= max_capacity` holds at every
/// committed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingLot {
    /// Unique lot identifier.
    pub id: LotId,
    /// Human-readable lot name.
    pub name: String,
    /// Hard occupancy ceiling. Immutable after creation.
    pub max_capacity: u32,
    /// Number of vehicles currently checked in.
    pub current_occupancy: u32,
    /// When the lot was registered.
    pub created_at: DateTime<Utc>,
}

impl ParkingLot {
    /// Whether the lot is at its occupancy ceiling.
    pub fn is_full(&self) -> bool {
        self.current_occupancy >= self.max_capacity
    }

    /// Number of free slots.
    pub fn available(&self) -> u32 {
        self.max_capacity.saturating_sub(self.current_occupancy)
    }
}

/// Data required to register a new parking lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParkingLot {
    /// Human-readable lot name.
    pub name: String,
    /// Hard occupancy ceiling. Must be positive.
    pub max_capacity: u32,
}
