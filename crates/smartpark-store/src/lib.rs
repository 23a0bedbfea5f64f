//! # smartpark-store
//!
//! In-memory implementation of the SmartPark transactional store seam.
//!
//! [`MemoryStore`] provides atomic multi-key transactions with optimistic
//! concurrency control: reads record the observed document version, and a
//! commit validates every recorded version and applies all staged writes
//! under one lock. Suitable for single-node deployments and as the test
//! seam; a multi-node deployment would back the same traits with an
//! external store.

pub mod memory;

pub use memory::MemoryStore;
