//! Authorization token domain entities.

pub mod model;

pub use model::AuthToken;
