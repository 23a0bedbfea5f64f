//! Audit logging.

pub mod logger;

pub use logger::AuditLogger;
