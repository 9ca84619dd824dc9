//! Route definitions for the `/helprequest` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::help_request;
use crate::state::AppState;

/// Routes mounted at `/helprequest`.
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
        .route("/all", get(help_request::list_all))
        .route("/post", post(help_request::create))
        .route(
            "/",
            get(help_request::get_by_id)
                .put(help_request::update)
                .delete(help_request::delete),
        )
}
