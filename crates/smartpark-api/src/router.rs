//! Route definitions for the SmartPark HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use smartpark_core::config::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(lot_routes())
        .merge(session_routes())
        .merge(token_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Lot registration and occupancy queries
fn lot_routes() -> Router<AppState> {
    Router::new()
        .route("/lots", post(handlers::lot::create_lot))
        .route("/lots", get(handlers::lot::list_lots))
        .route("/lots/{id}", get(handlers::lot::get_lot))
}

/// Session lifecycle endpoints
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/lots/{id}/check-in", post(handlers::session::check_in))
        .route(
            "/sessions/{id}/check-out",
            post(handlers::session::check_out),
        )
        .route("/sessions/{id}", get(handlers::session::get_session))
}

/// Token issuance and validation
fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/tokens", post(handlers::token::issue_token))
        .route("/tokens/validate", post(handlers::token::validate_token))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    use axum::http::HeaderValue;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
