//! Handlers for the `/users` resource (account administration).
//!
//! All handlers require the `admin` role via [`RequireAdmin`]. Role changes
//! and deletions are rejected when targeting the caller's own account.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::roles::Role;
use storefront_core::types::DbId;
use storefront_db::models::user::{CreateUser, UserResponse};
use storefront_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `PATCH /users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
///
/// List all accounts with the password hash stripped.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/v1/users
///
/// Create an account with an explicit role. Returns 201 with the hash
/// stripped.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let (email, password) = match (input.email.as_deref(), input.password.as_deref()) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Email and password are required".into(),
            )))
        }
    };

    let role = parse_role(input.role.as_deref())?;

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already used".into(),
        )));
    }

    let hashed = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        email: email.to_string(),
        password_hash: hashed,
        role: role.as_str().to_string(),
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PATCH /api/v1/users/{id}/role
///
/// Overwrite an account's role. Rejected with 403 when the admin targets
/// their own account.
pub async fn set_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    let role = parse_role(input.role.as_deref())?;

    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Administrators cannot change their own role".into(),
        )));
    }

    let user = UserRepo::set_role(&state.pool, id, role.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/users/{id}
///
/// Delete an account. Rejected with 403 when the admin targets their own
/// account. Dependent purchases and reclamations are left in place.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Administrators cannot delete their own account".into(),
        )));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "User deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a role string from a request body, rejecting anything outside
/// the closed set.
fn parse_role(role: Option<&str>) -> Result<Role, AppError> {
    role.and_then(Role::parse)
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid role".into())))
}
