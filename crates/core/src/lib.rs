//! Domain-level types shared across the storefront backend.
//!
//! - [`error`] -- the [`CoreError`](error::CoreError) taxonomy mapped to HTTP by the API crate.
//! - [`roles`] -- the closed account role enum.
//! - [`status`] -- the closed purchase and reclamation status enums.
//! - [`types`] -- database id and timestamp aliases.

pub mod error;
pub mod roles;
pub mod status;
pub mod types;
