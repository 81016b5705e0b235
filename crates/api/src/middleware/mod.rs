//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves a JWT Bearer token to an existing account.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
