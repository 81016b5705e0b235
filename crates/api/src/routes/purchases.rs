//! Route definitions for the `/purchases` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::purchases;
use crate::state::AppState;

/// Routes mounted at `/purchases`.
///
/// ```text
/// GET    /              -> list_all (admin)
/// POST   /              -> create (requires auth)
/// GET    /my            -> list_mine (requires auth)
/// PATCH  /{id}/status   -> set_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(purchases::list_all).post(purchases::create))
        .route("/my", get(purchases::list_mine))
        .route("/{id}/status", patch(purchases::set_status))
}
