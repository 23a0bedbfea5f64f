//! # smartpark-entity
//!
//! Domain entity models for SmartPark. Every struct in this crate
//! represents a document in the transactional store or a domain value
//! object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod audit;
pub mod lot;
pub mod session;
pub mod token;
