//! Shared test harness: in-memory store, manual clock, wired services.

use std::sync::Arc;

use chrono::Utc;

use smartpark_core::config::{SessionConfig, TokenConfig};
use smartpark_core::traits::clock::ManualClock;
use smartpark_core::traits::store::TransactionalStore;
use smartpark_core::types::{LotId, UserId};
use smartpark_entity::lot::CreateParkingLot;
use smartpark_service::{
    AuditLogger, LotService, OccupancyLedger, RequestContext, SessionManager, TokenService,
};
use smartpark_store::MemoryStore;

/// All services wired against one shared store and a manual clock.
pub struct TestHarness {
    pub clock: Arc<ManualClock>,
    pub lots: LotService,
    pub sessions: SessionManager,
    pub tokens: TokenService,
    pub audit: AuditLogger,
}

impl TestHarness {
    pub fn new() -> Self {
        let store: Arc<dyn TransactionalStore> = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let audit = AuditLogger::new(Arc::clone(&store), clock.clone());
        // Enough retries that contention tests never exhaust the bound:
        // a transaction only conflicts when another one commits, so
        // conflicts per task are bounded by the number of winners.
        let session_config = SessionConfig {
            max_transaction_retries: 20,
        };
        let sessions = SessionManager::new(
            Arc::clone(&store),
            OccupancyLedger::new(),
            audit.clone(),
            clock.clone(),
            session_config,
        );
        let tokens = TokenService::new(Arc::clone(&store), clock.clone(), TokenConfig::default());
        let lots = LotService::new(Arc::clone(&store), clock.clone());

        Self {
            clock,
            lots,
            sessions,
            tokens,
            audit,
        }
    }

    /// Registers an empty lot and returns its id.
    pub async fn create_lot(&self, name: &str, capacity: u32) -> LotId {
        self.lots
            .create_lot(
                &ctx(),
                CreateParkingLot {
                    name: name.to_string(),
                    max_capacity: capacity,
                },
            )
            .await
            .expect("create lot")
            .id
    }

    /// Committed occupancy of a lot.
    pub async fn occupancy(&self, lot_id: LotId) -> u32 {
        self.lots
            .get_lot(lot_id)
            .await
            .expect("get lot")
            .current_occupancy
    }
}

/// A fresh verified caller.
pub fn ctx() -> RequestContext {
    RequestContext::new(UserId::new())
}
