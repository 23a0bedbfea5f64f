//! # smartpark-service
//!
//! The transactional core of SmartPark. Every state-changing operation
//! runs as one atomic transaction against the store seam: a check-in
//! commits the occupancy increment, the new session, and its audit entry
//! together or not at all; a check-out is symmetric; token consumption
//! is a single atomic read-modify-write.

pub mod audit;
pub mod context;
pub mod ledger;
pub mod lot;
pub mod session;
pub mod token;

pub use audit::AuditLogger;
pub use context::RequestContext;
pub use ledger::OccupancyLedger;
pub use lot::LotService;
pub use session::SessionManager;
pub use token::TokenService;
