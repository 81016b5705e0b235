//! Repository for the `reclamations` table.

use sqlx::PgPool;
use storefront_core::status::ReclamationStatus;
use storefront_core::types::DbId;

use crate::models::reclamation::{Reclamation, ReclamationWithUser};

/// Column list for plain reclamation rows.
const COLUMNS: &str = "id, user_id, message, status, created_at, updated_at";

/// Column list for reclamation rows joined with the author's email.
const JOINED_COLUMNS: &str =
    "r.id, r.user_id, r.message, r.status, r.created_at, r.updated_at, u.email AS user_email";

const JOINS: &str = "LEFT JOIN users u ON u.id = r.user_id";

/// Provides operations for the reclamation workflow.
pub struct ReclamationRepo;

impl ReclamationRepo {
    /// Insert a reclamation with status forced to `en attente`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        message: &str,
    ) -> Result<Reclamation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reclamations (user_id, message, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reclamation>(&query)
            .bind(user_id)
            .bind(message)
            .bind(ReclamationStatus::EnAttente.as_str())
            .fetch_one(pool)
            .await
    }

    /// List one user's reclamations, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Reclamation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reclamations
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Reclamation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all reclamations system-wide, newest first, with author email joined.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ReclamationWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reclamations r {JOINS}
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReclamationWithUser>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a reclamation's status unconditionally and return the
    /// updated row with the author's email joined.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ReclamationStatus,
    ) -> Result<Option<ReclamationWithUser>, sqlx::Error> {
        let query = format!(
            "WITH r AS (
                UPDATE reclamations SET status = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM r {JOINS}"
        );
        sqlx::query_as::<_, ReclamationWithUser>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
