//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// PATCH  /{id}/role   -> set_role
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .route("/{id}/role", patch(users::set_role))
        .route("/{id}", delete(users::delete))
}
