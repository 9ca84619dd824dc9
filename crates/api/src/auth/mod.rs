//! Authentication primitives.
//!
//! - [`jwt`] -- Validation of the HS256 access tokens that carry the principal.

pub mod jwt;
