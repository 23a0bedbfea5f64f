//! Trait seams between the transactional core and its collaborators.

pub mod clock;
pub mod store;

pub use clock::Clock;
pub use store::{StoreTransaction, TransactionalStore};
