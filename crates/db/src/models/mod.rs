//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs used by the repositories
//! - Joined row structs for reads that expand references

pub mod product;
pub mod purchase;
pub mod reclamation;
pub mod user;
