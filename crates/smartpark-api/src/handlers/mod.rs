//! HTTP request handlers.

pub mod health;
pub mod lot;
pub mod session;
pub mod token;
