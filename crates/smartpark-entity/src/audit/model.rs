//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartpark_core::types::{AuditLogId, LotId, UserId};

use super::action::AuditAction;

/// An immutable record of a state-changing operation.
///
/// Entries are appended inside the same transaction as the transition
/// they document, so no transition commits without its entry and no
/// entry exists without its transition. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: AuditLogId,
    /// The transition that was performed.
    pub action: AuditAction,
    /// The acting user.
    pub user_id: UserId,
    /// The lot the transition applied to.
    pub lot_id: LotId,
    /// When the transition was recorded.
    pub recorded_at: DateTime<Utc>,
}
