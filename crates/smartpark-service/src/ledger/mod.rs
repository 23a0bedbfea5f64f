//! Occupancy ledger.

pub mod service;

pub use service::OccupancyLedger;
