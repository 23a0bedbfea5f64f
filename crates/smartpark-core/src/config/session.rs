//! Session transaction configuration.

use serde::{Deserialize, Serialize};

/// Session transaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum attempts for a check-in/check-out transaction that keeps
    /// losing the optimistic-concurrency race before `Conflict` is
    /// surfaced to the caller.
    #[serde(default = "default_max_retries")]
    pub max_transaction_retries: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_transaction_retries: default_max_retries(),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}
