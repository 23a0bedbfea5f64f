//! Shared value types used across SmartPark crates.

pub mod document;
pub mod id;
pub mod key;

pub use document::Document;
pub use id::{AuditLogId, LotId, SessionId, UserId};
pub use key::StoreKey;
