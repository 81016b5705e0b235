//! Route definitions for the `/products` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// The listing is public; mutations are admin-only (enforced by handler
/// extractors).
///
/// ```text
/// GET    /          -> list (public)
/// POST   /          -> create (admin)
/// PUT    /{id}      -> update (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/{id}", put(products::update).delete(products::delete))
}
