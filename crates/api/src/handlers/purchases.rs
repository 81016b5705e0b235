//! Handlers for the `/purchases` resource.
//!
//! A purchase is created by its owner with status forced to `pending`; only
//! administrators may list all purchases or overwrite a status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::error::CoreError;
use storefront_core::status::PurchaseStatus;
use storefront_core::types::{DbId, Timestamp};
use storefront_db::models::product::Product;
use storefront_db::models::purchase::{Purchase, PurchaseWithProduct};
use storefront_db::repositories::PurchaseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::UserSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /purchases`.
///
/// Any `status` field a client sends is ignored; creation always stores
/// `pending`.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    #[serde(rename = "productId")]
    pub product_id: Option<DbId>,
}

/// Request body for `PATCH /purchases/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: Option<String>,
}

/// Purchase with its references expanded for display.
///
/// `product` is `null` when the referenced product no longer exists. `user`
/// is `null` outside the admin listing, and in the admin listing when the
/// owner account has since been deleted -- the same shape as
/// [`ReclamationView`](super::reclamations::ReclamationView).
#[derive(Debug, Serialize)]
pub struct PurchaseView {
    pub id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub user: Option<UserSummary>,
    pub product: Option<Product>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/purchases
///
/// Create a purchase request for the authenticated user. The product id is
/// not checked for existence; an orphaned reference expands to null later.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreatePurchaseRequest>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    let product_id = input.product_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("productId is required".into()))
    })?;

    let purchase = PurchaseRepo::create(&state.pool, auth_user.user_id, product_id).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

/// GET /api/v1/purchases/my
///
/// The authenticated user's purchases, newest first, product expanded.
pub async fn list_mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<PurchaseView>>> {
    let rows = PurchaseRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    let views = rows.iter().map(|row| to_view(row, false)).collect();
    Ok(Json(views))
}

/// GET /api/v1/purchases
///
/// All purchases system-wide, newest first, owner and product expanded.
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<PurchaseView>>> {
    let rows = PurchaseRepo::list_all(&state.pool).await?;
    let views = rows.iter().map(|row| to_view(row, true)).collect();
    Ok(Json(views))
}

/// PATCH /api/v1/purchases/{id}/status
///
/// Overwrite a purchase's status. Any status may replace any other; no
/// transition graph is enforced.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<PurchaseView>> {
    let status = input
        .status
        .as_deref()
        .and_then(PurchaseStatus::parse)
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid status".into())))?;

    let row = PurchaseRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Purchase",
            id,
        }))?;

    Ok(Json(to_view(&row, false)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the display view from a joined row.
fn to_view(row: &PurchaseWithProduct, with_user: bool) -> PurchaseView {
    let user = if with_user {
        row.user_email.clone().map(|email| UserSummary {
            id: row.user_id,
            email,
        })
    } else {
        None
    };

    PurchaseView {
        id: row.id,
        status: row.status.clone(),
        created_at: row.created_at,
        user,
        product: row.product(),
    }
}
