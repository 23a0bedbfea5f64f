//! Application state shared across all handlers.

use std::sync::Arc;

use smartpark_core::config::AppConfig;
use smartpark_core::traits::store::TransactionalStore;
use smartpark_service::{LotService, SessionManager, TokenService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All services
/// share one store, so every handler observes the same committed data.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Transactional store, probed by the health endpoint.
    pub store: Arc<dyn TransactionalStore>,
    /// Lot registration and occupancy queries.
    pub lot_service: LotService,
    /// Session check-in/check-out.
    pub session_manager: SessionManager,
    /// Token issuance and validation.
    pub token_service: TokenService,
}
