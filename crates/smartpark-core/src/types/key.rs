//! Store keys addressing documents by collection and identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::id::{AuditLogId, LotId, SessionId};

/// Collection holding parking lot documents.
pub const LOTS: &str = "lots";
/// Collection holding session documents.
pub const SESSIONS: &str = "sessions";
/// Collection holding audit log entries.
pub const AUDIT_LOGS: &str = "audit_logs";
/// Collection holding authorization token records.
pub const TOKENS: &str = "tokens";

/// Addresses a single document in the transactional store.
///
/// A key is a `(collection, id)` pair. Token records are keyed by the
/// token value itself; every other entity is keyed by its UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey {
    /// The collection the document belongs to.
    pub collection: &'static str,
    /// The document identifier within the collection.
    pub id: String,
}

impl StoreKey {
    /// Create a key from a collection name and raw identifier.
    pub fn new(collection: &'static str, id: impl Into<String>) -> Self {
        Self {
            collection,
            id: id.into(),
        }
    }

    /// Key of a parking lot document.
    pub fn lot(id: &LotId) -> Self {
        Self::new(LOTS, id.to_string())
    }

    /// Key of a session document.
    pub fn session(id: &SessionId) -> Self {
        Self::new(SESSIONS, id.to_string())
    }

    /// Key of an audit log entry.
    pub fn audit_log(id: &AuditLogId) -> Self {
        Self::new(AUDIT_LOGS, id.to_string())
    }

    /// Key of an authorization token record.
    pub fn token(value: &str) -> Self {
        Self::new(TOKENS, value)
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}
