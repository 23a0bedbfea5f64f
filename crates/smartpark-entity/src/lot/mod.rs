//! Parking lot domain entities.

pub mod model;

pub use model::{CreateParkingLot, ParkingLot};
