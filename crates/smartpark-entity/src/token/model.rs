//! Authorization token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartpark_core::types::UserId;

/// A short-lived, single-use credential authorizing a check-in flow.
///
/// The token value doubles as the store key. `used` flips `false` →
/// `true` exactly once, inside the same transaction that reads the
/// record; it never flips back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// The unguessable token value.
    pub value: String,
    /// The user the token was issued to.
    pub user_id: UserId,
    /// Absolute expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Whether the token has been consumed.
    pub used: bool,
}

impl AuthToken {
    /// Whether the token has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
