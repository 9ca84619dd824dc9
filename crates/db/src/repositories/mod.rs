//! Repository structs providing CRUD operations for each record table.
//!
//! Each repository is a zero-sized struct with async associated functions
//! that take a `&PgPool` as the first argument.

pub mod help_request_repo;
pub mod menu_item_review_repo;
pub mod ucsb_dining_commons_menu_item_repo;
pub mod ucsb_organization_repo;

pub use help_request_repo::HelpRequestRepo;
pub use menu_item_review_repo::MenuItemReviewRepo;
pub use ucsb_dining_commons_menu_item_repo::UcsbDiningCommonsMenuItemRepo;
pub use ucsb_organization_repo::UcsbOrganizationRepo;
