//! Shared response types for API handlers.

use serde::Serialize;
use storefront_core::types::DbId;

/// Standard `{ "message": ... }` confirmation body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Minimal account view embedded in admin listings of purchases and
/// reclamations -- id and email only, never more.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub email: String,
}
