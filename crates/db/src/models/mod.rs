//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` record struct matching the database row
//!   (JSON field names are camelCase)
//! - A create DTO built by the HTTP layer from individual parameters
//! - A `Deserialize` update DTO carrying every mutable field
//! - The record's [`Entity`](crate::Entity) impl

pub mod help_request;
pub mod menu_item_review;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
