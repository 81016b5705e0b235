//! Repository for the `purchases` table.

use sqlx::PgPool;
use storefront_core::status::PurchaseStatus;
use storefront_core::types::DbId;

use crate::models::purchase::{Purchase, PurchaseWithProduct};

/// Column list for plain purchase rows.
const COLUMNS: &str = "id, user_id, product_id, status, created_at, updated_at";

/// Column list for purchase rows joined with owner email and product columns.
///
/// Aliases match the field names of [`PurchaseWithProduct`].
const JOINED_COLUMNS: &str = "p.id, p.user_id, p.product_id, p.status, p.created_at, p.updated_at, \
     u.email AS user_email, \
     pr.id AS product_row_id, \
     pr.name AS product_name, \
     pr.description AS product_description, \
     pr.price AS product_price, \
     pr.image AS product_image, \
     pr.categorie AS product_categorie, \
     pr.created_at AS product_created_at, \
     pr.updated_at AS product_updated_at";

/// LEFT JOINs so orphaned references decode as NULL instead of dropping rows.
const JOINS: &str =
    "LEFT JOIN users u ON u.id = p.user_id LEFT JOIN products pr ON pr.id = p.product_id";

/// Provides operations for the purchase workflow.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Insert a purchase request with status forced to `pending`.
    ///
    /// The product reference is deliberately not checked for existence.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
    ) -> Result<Purchase, sqlx::Error> {
        let query = format!(
            "INSERT INTO purchases (user_id, product_id, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(user_id)
            .bind(product_id)
            .bind(PurchaseStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// List one user's purchases, newest first, with product columns joined.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PurchaseWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM purchases p {JOINS}
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PurchaseWithProduct>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all purchases system-wide, newest first, with owner email and
    /// product columns joined.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PurchaseWithProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM purchases p {JOINS}
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PurchaseWithProduct>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a purchase's status unconditionally and return the updated
    /// row with joined columns.
    ///
    /// Returns `None` if no row with the given `id` exists. No transition
    /// graph is enforced; setting the current status again is a no-op apart
    /// from `updated_at`.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: PurchaseStatus,
    ) -> Result<Option<PurchaseWithProduct>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE purchases SET status = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM p {JOINS}"
        );
        sqlx::query_as::<_, PurchaseWithProduct>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
