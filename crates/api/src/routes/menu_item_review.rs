//! Route definitions for the `/menuitemreview` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::menu_item_review;
use crate::state::AppState;

/// Routes mounted at `/menuitemreview`.
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
        .route("/all", get(menu_item_review::list_all))
        .route("/post", post(menu_item_review::create))
        .route(
            "/",
            get(menu_item_review::get_by_id)
                .put(menu_item_review::update)
                .delete(menu_item_review::delete),
        )
}
