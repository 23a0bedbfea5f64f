//! Transactional document store seam.
//!
//! The core never mutates occupancy counts, sessions, or tokens outside
//! an atomic multi-key transaction obtained from this trait. Persistence
//! mechanics below the transaction boundary are an external concern; the
//! in-memory implementation lives in `smartpark-store`.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Document, StoreKey};

/// A document store supporting atomic multi-key read-modify-write
/// transactions with optimistic concurrency control.
///
/// Implementations must guarantee that a transaction's writes become
/// visible all at once or not at all, and that a commit fails with
/// `ErrorKind::Conflict` when any document read inside the transaction
/// was modified by a concurrent commit.
#[async_trait]
pub trait TransactionalStore: Send + Sync + 'static {
    /// Begin a new transaction.
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>>;

    /// Read the committed value of a single document.
    async fn get(&self, key: &StoreKey) -> AppResult<Option<Document>>;

    /// Read a committed snapshot of an entire collection, ordered by
    /// commit sequence (oldest first).
    async fn scan(&self, collection: &'static str) -> AppResult<Vec<Document>>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// A single atomic transaction.
///
/// Reads record the observed document version for commit-time validation;
/// writes are staged and have no effect outside the transaction. Dropping
/// a transaction without committing aborts it with no observable effect.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Read a document, observing staged writes made earlier in this
    /// transaction before falling back to the committed state.
    async fn get(&mut self, key: &StoreKey) -> AppResult<Option<Document>>;

    /// Stage a write. Visible to later `get` calls in this transaction
    /// only; applied atomically at commit.
    fn put(&mut self, key: StoreKey, document: Document);

    /// Validate every observed read against the committed state and, if
    /// nothing changed underneath, apply all staged writes atomically.
    ///
    /// Fails with `ErrorKind::Conflict` when validation fails; the store
    /// is left untouched in that case.
    async fn commit(self: Box<Self>) -> AppResult<()>;
}
