//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// Full product row from the `products` table.
///
/// `categorie` is an unvalidated free-text label; the field name is part of
/// the external JSON contract and is kept as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub categorie: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new product. Validation happens at the API boundary.
#[derive(Debug)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub categorie: String,
}

/// DTO for partially updating a product. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub categorie: Option<String>,
}
