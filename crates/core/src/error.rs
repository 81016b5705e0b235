//! Error vocabulary shared by the storefront's data and API layers.
//!
//! Repositories and handlers surface failures as [`CoreError`]; the API
//! crate owns the mapping onto HTTP statuses and the `{"error", "code"}`
//! JSON body. Variant messages are client-facing, so the exact wording of
//! things like the duplicate-email and credential failures is part of the
//! public contract.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A user, product, purchase, or reclamation lookup came up empty.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A request body failed a boundary check: missing credentials, a blank
    /// reclamation message, a negative price, or a value outside one of the
    /// closed role/status sets.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An email address is already taken. Reported to clients as 400, not
    /// 409.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad login credentials, or a missing/invalid bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The account is authenticated but not allowed: a non-admin on the
    /// admin surface, or an admin targeting their own account.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Anything that should never surface in normal operation; clients only
    /// see a sanitized message.
    #[error("Internal error: {0}")]
    Internal(String),
}
