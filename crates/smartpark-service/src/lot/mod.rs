//! Parking lot administration.

pub mod service;

pub use service::LotService;
