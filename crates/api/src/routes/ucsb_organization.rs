//! Route definitions for the `/ucsborganizations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ucsb_organization;
use crate::state::AppState;

/// Routes mounted at `/ucsborganizations`.
///
/// ```text
/// GET    /all          -> list_all
/// POST   /post         -> create
/// GET    /?orgCode=    -> get_by_code
/// PUT    /?orgCode=    -> update
/// DELETE /?orgCode=    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(ucsb_organization::list_all))
        .route("/post", post(ucsb_organization::create))
        .route(
            "/",
            get(ucsb_organization::get_by_code)
                .put(ucsb_organization::update)
                .delete(ucsb_organization::delete),
        )
}
