//! Handlers for the `/reclamations` resource.
//!
//! A reclamation is a free-text complaint created by its author with status
//! forced to `en attente`; only administrators may list all reclamations or
//! overwrite a status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::error::CoreError;
use storefront_core::status::ReclamationStatus;
use storefront_core::types::{DbId, Timestamp};
use storefront_db::models::reclamation::{Reclamation, ReclamationWithUser};
use storefront_db::repositories::ReclamationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::UserSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /reclamations`.
#[derive(Debug, Deserialize)]
pub struct CreateReclamationRequest {
    pub message: Option<String>,
}

/// Request body for `PATCH /reclamations/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: Option<String>,
}

/// Reclamation with the author expanded for display.
///
/// `user` is `null` when the author account has since been deleted.
#[derive(Debug, Serialize)]
pub struct ReclamationView {
    pub id: DbId,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub user: Option<UserSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reclamations
///
/// Create a reclamation for the authenticated user. The message must be
/// non-blank; status is always stored as `en attente`.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateReclamationRequest>,
) -> AppResult<(StatusCode, Json<Reclamation>)> {
    let message = input
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Message is required".into())))?;

    let reclamation = ReclamationRepo::create(&state.pool, auth_user.user_id, message).await?;
    Ok((StatusCode::CREATED, Json(reclamation)))
}

/// GET /api/v1/reclamations/my
///
/// The authenticated user's reclamations, newest first.
pub async fn list_mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Reclamation>>> {
    let reclamations = ReclamationRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(reclamations))
}

/// GET /api/v1/reclamations
///
/// All reclamations system-wide, newest first, author expanded.
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ReclamationView>>> {
    let rows = ReclamationRepo::list_all(&state.pool).await?;
    let views = rows.into_iter().map(to_view).collect();
    Ok(Json(views))
}

/// PATCH /api/v1/reclamations/{id}/status
///
/// Overwrite a reclamation's status. Any status may replace any other; no
/// transition graph is enforced.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<ReclamationView>> {
    let status = input
        .status
        .as_deref()
        .and_then(ReclamationStatus::parse)
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid status".into())))?;

    let row = ReclamationRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reclamation",
            id,
        }))?;

    Ok(Json(to_view(row)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the display view from a joined row.
fn to_view(row: ReclamationWithUser) -> ReclamationView {
    let user = row.user_email.map(|email| UserSummary {
        id: row.user_id,
        email,
    });

    ReclamationView {
        id: row.id,
        message: row.message,
        status: row.status,
        created_at: row.created_at,
        user,
    }
}
