//! Route definitions for the `/reclamations` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::reclamations;
use crate::state::AppState;

/// Routes mounted at `/reclamations`.
///
/// ```text
/// GET    /              -> list_all (admin)
/// POST   /              -> create (requires auth)
/// GET    /my            -> list_mine (requires auth)
/// PATCH  /{id}/status   -> set_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reclamations::list_all).post(reclamations::create))
        .route("/my", get(reclamations::list_mine))
        .route("/{id}/status", patch(reclamations::set_status))
}
