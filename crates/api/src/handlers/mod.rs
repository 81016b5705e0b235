//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `storefront_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod products;
pub mod purchases;
pub mod reclamations;
pub mod users;
