//! Authorization token issuance and validation.

pub mod service;

pub use service::TokenService;
