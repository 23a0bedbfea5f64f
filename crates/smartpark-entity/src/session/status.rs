//! Session lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a parking session.
///
/// The only legal transition is `Active` → `Completed`; a completed
/// session is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// The vehicle is checked in and holds one occupancy slot.
    Active,
    /// The vehicle has checked out; the slot has been released.
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}
