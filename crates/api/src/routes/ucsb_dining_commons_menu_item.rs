//! Route definitions for the `/ucsbdiningcommonsmenuitems` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ucsb_dining_commons_menu_item;
use crate::state::AppState;

/// Routes mounted at `/ucsbdiningcommonsmenuitems`.
///
/// ```text
/// GET    /all          -> list_all
/// POST   /post         -> create
/// GET    /?id=         -> get_by_id
/// PUT    /?id=         -> update
/// DELETE /?id=         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(ucsb_dining_commons_menu_item::list_all))
        .route("/post", post(ucsb_dining_commons_menu_item::create))
        .route(
            "/",
            get(ucsb_dining_commons_menu_item::get_by_id)
                .put(ucsb_dining_commons_menu_item::update)
                .delete(ucsb_dining_commons_menu_item::delete),
        )
}
