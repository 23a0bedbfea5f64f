//! Append-only audit trail, co-committed with the transitions it documents.

use std::sync::Arc;

use smartpark_core::result::AppResult;
use smartpark_core::traits::clock::Clock;
use smartpark_core::traits::store::{StoreTransaction, TransactionalStore};
use smartpark_core::types::key::AUDIT_LOGS;
use smartpark_core::types::{AuditLogId, Document, LotId, StoreKey, UserId};
use smartpark_entity::audit::{AuditAction, AuditLogEntry};

/// Appends immutable audit entries.
///
/// `append` stages the entry into the caller's transaction and performs
/// no business validation; the entry commits if and only if the
/// transition it documents commits. Entries are never updated, deleted,
/// or independently retried.
#[derive(Clone)]
pub struct AuditLogger {
    /// Store handle for committed queries.
    store: Arc<dyn TransactionalStore>,
    /// Timestamp source.
    clock: Arc<dyn Clock>,
}

impl AuditLogger {
    /// Creates a new audit logger.
    pub fn new(store: Arc<dyn TransactionalStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stages one audit entry into the caller's transaction.
    pub fn append(
        &self,
        tx: &mut dyn StoreTransaction,
        action: AuditAction,
        user_id: UserId,
        lot_id: LotId,
    ) -> AppResult<AuditLogEntry> {
        let entry = AuditLogEntry {
            id: AuditLogId::new(),
            action,
            user_id,
            lot_id,
            recorded_at: self.clock.now(),
        };
        tx.put(StoreKey::audit_log(&entry.id), Document::encode(&entry)?);
        Ok(entry)
    }

    /// Returns all committed entries for a lot, in commit order.
    pub async fn entries_for_lot(&self, lot_id: LotId) -> AppResult<Vec<AuditLogEntry>> {
        let documents = self.store.scan(AUDIT_LOGS).await?;
        let mut entries = Vec::with_capacity(documents.len());
        for document in &documents {
            let entry: AuditLogEntry = document.decode()?;
            if entry.lot_id == lot_id {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
