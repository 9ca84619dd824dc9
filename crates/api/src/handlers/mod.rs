//! Request handlers, one module per resource.
//!
//! Every handler names its required role through its first extractor
//! ([`RequireUser`](crate::middleware::rbac::RequireUser) or
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin)) and delegates the
//! store work to [`crate::resource`].

pub mod help_request;
pub mod menu_item_review;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
