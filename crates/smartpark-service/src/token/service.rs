//! Single-use authorization tokens for the check-in flow.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Duration;
use rand::RngExt;
use tracing::{info, warn};

use smartpark_core::config::TokenConfig;
use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::clock::Clock;
use smartpark_core::traits::store::TransactionalStore;
use smartpark_core::types::{Document, StoreKey, UserId};
use smartpark_entity::token::AuthToken;

use crate::context::RequestContext;

/// Number of random bytes in a token value (256 bits).
const TOKEN_BYTES: usize = 32;

/// Issues and consumes short-lived, single-use authorization tokens.
///
/// Token state is independent of session state: issuance and validation
/// each touch only the token record, in one atomic transaction.
#[derive(Clone)]
pub struct TokenService {
    /// Transactional store seam.
    store: Arc<dyn TransactionalStore>,
    /// Timestamp source for expiry.
    clock: Arc<dyn Clock>,
    /// Validity window and retry bounds.
    config: TokenConfig,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service.
    pub fn new(
        store: Arc<dyn TransactionalStore>,
        clock: Arc<dyn Clock>,
        config: TokenConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Issues a fresh token for the caller.
    ///
    /// The issuing transaction reads the token key first and aborts with
    /// `Conflict` if a record already exists, so a generator collision
    /// never silently overwrites someone else's unused token. Issuance
    /// retries with a newly generated value, bounded by configuration.
    pub async fn issue(&self, ctx: &RequestContext) -> AppResult<AuthToken> {
        let max_attempts = self.config.max_issue_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            let value = generate_token_value();
            match self.try_issue(ctx.user_id, value).await {
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(attempt = attempt, "Token value collided, regenerating");
                }
                other => return other,
            }
        }
    }

    /// Validates and consumes a token, returning the owning user.
    ///
    /// The read and the `used = true` write are one atomic transaction;
    /// of any number of concurrent validations exactly one commits, and
    /// the losers retry, observe the consumed record, and receive
    /// `InvalidToken`.
    pub async fn validate(&self, ctx: &RequestContext, token: &str) -> AppResult<UserId> {
        let max_attempts = self.config.max_validate_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_validate(token).await {
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        caller = %ctx.user_id,
                        attempt = attempt,
                        "Token validation lost concurrency race, retrying"
                    );
                }
                Ok(owner) => {
                    info!(caller = %ctx.user_id, owner = %owner, "Token consumed");
                    return Ok(owner);
                }
                other => return other,
            }
        }
    }

    async fn try_issue(&self, user_id: UserId, value: String) -> AppResult<AuthToken> {
        let validity = i64::try_from(self.config.validity_seconds).map_err(|_| {
            AppError::configuration("token.validity_seconds does not fit in a duration")
        })?;

        let mut tx = self.store.begin().await?;

        let key = StoreKey::token(&value);
        if tx.get(&key).await?.is_some() {
            return Err(AppError::conflict("Generated token value already exists"));
        }

        let token = AuthToken {
            value,
            user_id,
            expires_at: self.clock.now() + Duration::seconds(validity),
            used: false,
        };
        tx.put(key, Document::encode(&token)?);
        tx.commit().await?;

        info!(user_id = %user_id, expires_at = %token.expires_at, "Token issued");
        Ok(token)
    }

    async fn try_validate(&self, token: &str) -> AppResult<UserId> {
        let mut tx = self.store.begin().await?;

        let key = StoreKey::token(token);
        let document = tx
            .get(&key)
            .await?
            .ok_or_else(|| AppError::invalid_token("Unknown token"))?;
        let mut record: AuthToken = document.decode()?;

        if record.used {
            return Err(AppError::invalid_token("Token already used"));
        }
        if record.is_expired(self.clock.now()) {
            return Err(AppError::invalid_token("Token expired"));
        }

        record.used = true;
        tx.put(key, Document::encode(&record)?);
        tx.commit().await?;

        Ok(record.user_id)
    }
}

/// Generates a URL-safe token value from 256 random bits.
fn generate_token_value() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use smartpark_core::error::ErrorKind;
    use smartpark_core::traits::clock::SystemClock;
    use smartpark_store::MemoryStore;

    #[test]
    fn test_token_values_are_unique_and_urlsafe() {
        let first = generate_token_value();
        let second = generate_token_value();
        assert_ne!(first, second);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        // 32 bytes in unpadded base64.
        assert_eq!(first.len(), 43);
    }

    #[tokio::test]
    async fn test_oversized_validity_is_a_configuration_error() {
        let service = TokenService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemClock),
            TokenConfig {
                validity_seconds: u64::MAX,
                ..TokenConfig::default()
            },
        );

        let err = service
            .issue(&RequestContext::new(UserId::new()))
            .await
            .expect_err("validity overflows a signed duration");
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
