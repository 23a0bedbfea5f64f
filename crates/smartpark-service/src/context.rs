//! Per-request context carrying the verified caller identity.

use smartpark_core::types::UserId;

/// Identity context for one request.
///
/// Constructed only from an identity already verified by the external
/// identity provider; the core never sees unauthenticated callers. This
/// keeps the services testable without a live provider.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The verified caller.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a context for a verified caller.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
