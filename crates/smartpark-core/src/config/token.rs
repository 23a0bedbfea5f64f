//! Authorization token configuration.

use serde::{Deserialize, Serialize};

/// Authorization token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Validity window of an issued token in seconds.
    #[serde(default = "default_validity")]
    pub validity_seconds: u64,
    /// Maximum regeneration attempts when an issued token value collides
    /// with an existing record.
    #[serde(default = "default_issue_attempts")]
    pub max_issue_attempts: u32,
    /// Maximum attempts for a consume transaction that keeps losing the
    /// optimistic-concurrency race before `Conflict` is surfaced.
    #[serde(default = "default_validate_attempts")]
    pub max_validate_attempts: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            validity_seconds: default_validity(),
            max_issue_attempts: default_issue_attempts(),
            max_validate_attempts: default_validate_attempts(),
        }
    }
}

fn default_validity() -> u64 {
    120
}

fn default_issue_attempts() -> u32 {
    3
}

fn default_validate_attempts() -> u32 {
    3
}
