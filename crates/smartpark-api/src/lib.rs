//! # smartpark-api
//!
//! HTTP API layer for SmartPark built on Axum.
//!
//! Provides the REST endpoints, the caller-identity extractor, DTOs,
//! and the mapping from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use router::build_router;
pub use state::AppState;
