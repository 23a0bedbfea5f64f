//! Audited state transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The state transition an audit entry documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A session was created and an occupancy slot claimed.
    CheckIn,
    /// A session was completed and its occupancy slot released.
    CheckOut,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckIn => write!(f, "CHECK_IN"),
            Self::CheckOut => write!(f, "CHECK_OUT"),
        }
    }
}
