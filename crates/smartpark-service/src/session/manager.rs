//! Session lifecycle manager — check-in and check-out transactions.

use std::sync::Arc;

use tracing::{info, warn};

use smartpark_core::config::SessionConfig;
use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::clock::Clock;
use smartpark_core::traits::store::TransactionalStore;
use smartpark_core::types::{Document, LotId, SessionId, StoreKey};
use smartpark_entity::audit::AuditAction;
use smartpark_entity::session::{Session, SessionStatus};

use crate::audit::AuditLogger;
use crate::context::RequestContext;
use crate::ledger::OccupancyLedger;

/// Owns the per-session state machine `(none) → ACTIVE → COMPLETED`.
///
/// Every transition runs as one atomic transaction spanning the
/// occupancy ledger, the session record, and the audit trail. A
/// transaction that loses the optimistic race is retried a bounded
/// number of times before `Conflict` is surfaced; every other failure
/// is terminal for the request.
#[derive(Clone)]
pub struct SessionManager {
    /// Transactional store seam.
    store: Arc<dyn TransactionalStore>,
    /// Occupancy counting.
    ledger: OccupancyLedger,
    /// Audit trail.
    audit: AuditLogger,
    /// Timestamp source.
    clock: Arc<dyn Clock>,
    /// Retry configuration.
    config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        store: Arc<dyn TransactionalStore>,
        ledger: OccupancyLedger,
        audit: AuditLogger,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Self {
        Self {
            store,
            ledger,
            audit,
            clock,
            config,
        }
    }

    /// Checks the caller in at the given lot.
    ///
    /// One transaction: claim an occupancy slot, create the ACTIVE
    /// session, append the CHECK_IN audit entry. All three commit or
    /// none do. Concurrent check-ins racing for the last slots
    /// serialize at commit; exactly as many win as there are free
    /// slots, and losers receive `CapacityExceeded`.
    pub async fn check_in(&self, ctx: &RequestContext, lot_id: LotId) -> AppResult<Session> {
        self.with_retries("check-in", || self.try_check_in(ctx, lot_id))
            .await
    }

    /// Checks an active session out.
    ///
    /// One transaction: mark the session COMPLETED, release its
    /// occupancy slot, append the CHECK_OUT audit entry. A session that
    /// is unknown or already completed is rejected with
    /// `InvalidSession`, which makes retrying a failed-looking call
    /// safe: a second invocation observes COMPLETED instead of
    /// decrementing twice.
    pub async fn check_out(&self, ctx: &RequestContext, session_id: SessionId) -> AppResult<()> {
        self.with_retries("check-out", || self.try_check_out(ctx, session_id))
            .await
    }

    /// Reads the committed state of a session.
    pub async fn get_session(&self, session_id: SessionId) -> AppResult<Session> {
        let document = self
            .store
            .get(&StoreKey::session(&session_id))
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session {session_id} not found")))?;
        document.decode()
    }

    /// Runs one attempt plus bounded retries for `Conflict` losses.
    async fn with_retries<T, F, Fut>(&self, operation: &'static str, attempt_fn: F) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let max_attempts = self.config.max_transaction_retries.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match attempt_fn().await {
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        operation = operation,
                        attempt = attempt,
                        "Transaction lost concurrency race, retrying"
                    );
                }
                other => return other,
            }
        }
    }

    async fn try_check_in(&self, ctx: &RequestContext, lot_id: LotId) -> AppResult<Session> {
        let mut tx = self.store.begin().await?;

        let lot = self.ledger.try_increment(tx.as_mut(), lot_id).await?;

        let session = Session {
            id: SessionId::new(),
            user_id: ctx.user_id,
            lot_id,
            status: SessionStatus::Active,
            checked_in_at: self.clock.now(),
            checked_out_at: None,
        };
        tx.put(StoreKey::session(&session.id), Document::encode(&session)?);

        self.audit
            .append(tx.as_mut(), AuditAction::CheckIn, ctx.user_id, lot_id)?;

        tx.commit().await?;

        info!(
            user_id = %ctx.user_id,
            lot_id = %lot_id,
            session_id = %session.id,
            occupancy = lot.current_occupancy,
            "Check-in committed"
        );
        Ok(session)
    }

    async fn try_check_out(&self, ctx: &RequestContext, session_id: SessionId) -> AppResult<()> {
        let mut tx = self.store.begin().await?;

        let key = StoreKey::session(&session_id);
        let document = tx
            .get(&key)
            .await?
            .ok_or_else(|| AppError::invalid_session(format!("Session {session_id} not found")))?;
        let mut session: Session = document.decode()?;

        if session.status != SessionStatus::Active {
            return Err(AppError::invalid_session(format!(
                "Session {session_id} is not active"
            )));
        }

        session.status = SessionStatus::Completed;
        session.checked_out_at = Some(self.clock.now());
        tx.put(key, Document::encode(&session)?);

        let lot = self.ledger.decrement(tx.as_mut(), session.lot_id).await?;

        self.audit.append(
            tx.as_mut(),
            AuditAction::CheckOut,
            ctx.user_id,
            session.lot_id,
        )?;

        tx.commit().await?;

        info!(
            user_id = %ctx.user_id,
            lot_id = %session.lot_id,
            session_id = %session_id,
            occupancy = lot.current_occupancy,
            "Check-out committed"
        );
        Ok(())
    }
}
