//! In-memory versioned document store using a Tokio mutex.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::store::{StoreTransaction, TransactionalStore};
use smartpark_core::types::{Document, StoreKey};

/// A committed document together with its concurrency metadata.
#[derive(Debug, Clone)]
struct VersionedDocument {
    /// Bumped on every committed write; reads validate against it.
    version: u64,
    /// Global commit sequence, used for scan ordering.
    seq: u64,
    /// The document payload.
    document: Document,
}

/// Internal state for the memory store.
#[derive(Debug, Default)]
struct Inner {
    /// Committed documents by key.
    documents: HashMap<StoreKey, VersionedDocument>,
    /// Next global write sequence number.
    next_seq: u64,
}

/// In-memory transactional document store.
///
/// Every transaction records the version of each document it reads
/// (zero for a document observed absent). Commit takes the single store
/// lock, re-validates every recorded version, and applies all staged
/// writes, so conflicting transactions serialize with the first
/// committer winning and losers failing with `Conflict`. No partially
/// applied transaction is ever observable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Protected inner state, shared with open transactions.
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Creates a new, empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionalStore for MemoryStore {
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        Ok(Box::new(MemoryTransaction {
            inner: Arc::clone(&self.inner),
            reads: HashMap::new(),
            writes: Vec::new(),
        }))
    }

    async fn get(&self, key: &StoreKey) -> AppResult<Option<Document>> {
        let inner = self.inner.lock().await;
        Ok(inner.documents.get(key).map(|v| v.document.clone()))
    }

    async fn scan(&self, collection: &'static str) -> AppResult<Vec<Document>> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<(u64, Document)> = inner
            .documents
            .iter()
            .filter(|(key, _)| key.collection == collection)
            .map(|(_, v)| (v.seq, v.document.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, doc)| doc).collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// A single open transaction against a [`MemoryStore`].
///
/// Writes are kept in put order so a later `put` to the same key
/// overrides an earlier one and scan ordering reflects intent.
struct MemoryTransaction {
    /// Shared store state.
    inner: Arc<Mutex<Inner>>,
    /// Observed versions, keyed by document; zero means observed absent.
    reads: HashMap<StoreKey, u64>,
    /// Staged writes in put order.
    writes: Vec<(StoreKey, Document)>,
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn get(&mut self, key: &StoreKey) -> AppResult<Option<Document>> {
        // Read-your-writes: the latest staged put wins.
        if let Some((_, staged)) = self.writes.iter().rev().find(|(k, _)| k == key) {
            return Ok(Some(staged.clone()));
        }

        let inner = self.inner.lock().await;
        match inner.documents.get(key) {
            Some(versioned) => {
                self.reads.insert(key.clone(), versioned.version);
                Ok(Some(versioned.document.clone()))
            }
            None => {
                self.reads.insert(key.clone(), 0);
                Ok(None)
            }
        }
    }

    fn put(&mut self, key: StoreKey, document: Document) {
        self.writes.push((key, document));
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut inner = self.inner.lock().await;

        // Validate every observed read against the committed state.
        for (key, observed) in &self.reads {
            let current = inner.documents.get(key).map(|v| v.version).unwrap_or(0);
            if current != *observed {
                debug!(
                    key = %key,
                    observed = observed,
                    current = current,
                    "Transaction lost optimistic race"
                );
                return Err(AppError::conflict(format!(
                    "Concurrent modification of {key}"
                )));
            }
        }

        // Apply all staged writes under the same lock.
        for (key, document) in self.writes {
            let seq = inner.next_seq;
            inner.next_seq += 1;
            match inner.documents.entry(key) {
                Entry::Occupied(mut occupied) => {
                    let versioned = occupied.get_mut();
                    versioned.version += 1;
                    versioned.seq = seq;
                    versioned.document = document;
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(VersionedDocument {
                        version: 1,
                        seq,
                        document,
                    });
                }
            }
        }

        Ok(())
    }
}
