//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the principal from a JWT Bearer token.
//! - [`rbac::RequireUser`] -- Requires the `user` role (admins qualify).
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
