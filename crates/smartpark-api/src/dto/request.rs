//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/lots`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLotRequest {
    /// Display name of the lot.
    pub name: String,
    /// Occupancy ceiling; must be positive.
    pub max_capacity: u32,
}

/// Body for `POST /api/tokens/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    /// The token value to consume.
    pub token: String,
}
