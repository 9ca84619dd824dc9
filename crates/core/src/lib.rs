//! Domain primitives shared by the store and HTTP layers.
//!
//! Nothing in this crate performs I/O: it defines the error vocabulary,
//! the key and timestamp types, and the role rules the API enforces.

pub mod error;
pub mod key;
pub mod roles;
pub mod types;
