//! Handlers for the `/products` resource.
//!
//! Reads are public; every mutation requires the `admin` role via
//! [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::product::{CreateProduct, Product, UpdateProduct};
use storefront_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /products`.
///
/// Fields are `Option` so missing input maps to a 400 validation error
/// instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub categorie: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/products
///
/// Public listing of all products. No pagination, no server-side filtering.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// POST /api/v1/products
///
/// Create a product. Requires name, description, price and categorie.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let create_dto = validate_create(input)?;
    let product = ProductRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}
///
/// Partially update a product. Only supplied fields are applied.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
///
/// Delete a product. Purchases referencing it keep their orphaned reference.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Product deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check presence of required fields and the price invariant.
fn validate_create(input: CreateProductRequest) -> Result<CreateProduct, AppError> {
    let (name, description, price, categorie) = match (
        input.name,
        input.description,
        input.price,
        input.categorie,
    ) {
        (Some(name), Some(description), Some(price), Some(categorie))
            if !name.trim().is_empty()
                && !description.trim().is_empty()
                && !categorie.trim().is_empty() =>
        {
            (name, description, price, categorie)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "name, description, price and categorie are required".into(),
            )))
        }
    };

    validate_price(price)?;

    Ok(CreateProduct {
        name,
        description,
        price,
        image: input.image,
        categorie,
    })
}

/// Prices must be finite and non-negative.
fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "price must be positive".into(),
        )));
    }
    Ok(())
}
