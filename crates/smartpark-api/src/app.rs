//! Application builder — wires services + router and runs the server.

use std::sync::Arc;

use tracing::info;

use smartpark_core::config::AppConfig;
use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::clock::{Clock, SystemClock};
use smartpark_core::traits::store::TransactionalStore;
use smartpark_service::{AuditLogger, LotService, OccupancyLedger, SessionManager, TokenService};
use smartpark_store::MemoryStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration.
///
/// Every service shares one store and one clock.
pub fn build_state(config: AppConfig) -> AppState {
    let store: Arc<dyn TransactionalStore> = Arc::new(MemoryStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let audit = AuditLogger::new(Arc::clone(&store), Arc::clone(&clock));
    let session_manager = SessionManager::new(
        Arc::clone(&store),
        OccupancyLedger::new(),
        audit,
        Arc::clone(&clock),
        config.session.clone(),
    );
    let token_service = TokenService::new(
        Arc::clone(&store),
        Arc::clone(&clock),
        config.token.clone(),
    );
    let lot_service = LotService::new(Arc::clone(&store), Arc::clone(&clock));

    AppState {
        config: Arc::new(config),
        store,
        lot_service,
        session_manager,
        token_service,
    }
}

/// Runs the SmartPark server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("SmartPark server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
