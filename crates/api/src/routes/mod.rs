//! Route modules and the `/api/v1` route tree.

pub mod auth;
pub mod health;
pub mod products;
pub mod purchases;
pub mod reclamations;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 register (public)
/// /auth/login                  login (public)
/// /auth/me                     current account (requires auth)
///
/// /products                    list (public), create (admin)
/// /products/{id}               update, delete (admin)
///
/// /purchases                   list all (admin), create (requires auth)
/// /purchases/my                own purchases (requires auth)
/// /purchases/{id}/status       overwrite status (admin)
///
/// /reclamations                list all (admin), create (requires auth)
/// /reclamations/my             own reclamations (requires auth)
/// /reclamations/{id}/status    overwrite status (admin)
///
/// /users                       list, create (admin)
/// /users/{id}/role             overwrite role (admin)
/// /users/{id}                  delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/purchases", purchases::router())
        .nest("/reclamations", reclamations::router())
        .nest("/users", users::router())
}
