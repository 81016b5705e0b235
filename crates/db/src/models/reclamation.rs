//! Reclamation entity model and joined row structs.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// Full reclamation row from the `reclamations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reclamation {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Reclamation row joined with the author's email.
///
/// `user_email` is `None` when the author account has since been deleted.
#[derive(Debug, Clone, FromRow)]
pub struct ReclamationWithUser {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_email: Option<String>,
}
