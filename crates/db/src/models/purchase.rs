//! Purchase entity model and joined row structs.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

use crate::models::product::Product;

/// Full purchase row from the `purchases` table.
///
/// `user_id` and `product_id` are non-owning references with no foreign-key
/// backing; either may point at a row that no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Purchase row joined with its owner's email and its product columns.
///
/// Both joins are LEFT JOINs: every joined column is `Option` so an orphaned
/// reference decodes as `None` instead of failing the read.
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseWithProduct {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_email: Option<String>,
    pub product_row_id: Option<DbId>,
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<f64>,
    pub product_image: Option<String>,
    pub product_categorie: Option<String>,
    pub product_created_at: Option<Timestamp>,
    pub product_updated_at: Option<Timestamp>,
}

impl PurchaseWithProduct {
    /// Rebuild the expanded product, or `None` when the reference is orphaned.
    pub fn product(&self) -> Option<Product> {
        Some(Product {
            id: self.product_row_id?,
            name: self.product_name.clone()?,
            description: self.product_description.clone()?,
            price: self.product_price?,
            image: self.product_image.clone(),
            categorie: self.product_categorie.clone()?,
            created_at: self.product_created_at?,
            updated_at: self.product_updated_at?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined_row(product_row_id: Option<DbId>) -> PurchaseWithProduct {
        let now = chrono::Utc::now();
        PurchaseWithProduct {
            id: 1,
            user_id: 10,
            product_id: 20,
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
            user_email: Some("user@example.com".to_string()),
            product_row_id,
            product_name: product_row_id.map(|_| "Printer".to_string()),
            product_description: product_row_id.map(|_| "A3 colour printer".to_string()),
            product_price: product_row_id.map(|_| 1299.99),
            product_image: None,
            product_categorie: product_row_id.map(|_| "imprimante laser".to_string()),
            product_created_at: product_row_id.map(|_| now),
            product_updated_at: product_row_id.map(|_| now),
        }
    }

    #[test]
    fn product_expands_when_reference_resolves() {
        let row = joined_row(Some(20));
        let product = row.product().expect("product should expand");
        assert_eq!(product.id, 20);
        assert_eq!(product.name, "Printer");
        assert_eq!(product.categorie, "imprimante laser");
    }

    #[test]
    fn orphaned_reference_expands_to_none() {
        let row = joined_row(None);
        assert!(row.product().is_none());
    }
}
