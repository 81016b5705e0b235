//! Account roles.
//!
//! The role model is deliberately a closed two-variant enum, not a
//! permissions matrix. Roles are stored as text in the `users.role` column
//! and carried verbatim in JWT claims.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Closed account role enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Return the stored/wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Parse a role string. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            ROLE_USER => Some(Role::User),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }
}
