//! Parking session domain entities.

pub mod model;
pub mod status;

pub use model::Session;
pub use status::SessionStatus;
