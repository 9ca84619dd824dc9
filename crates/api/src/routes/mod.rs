pub mod health;
pub mod help_request;
pub mod menu_item_review;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /helprequest                     GET ?id, PUT ?id, DELETE ?id
/// /helprequest/all                 GET (user)
/// /helprequest/post                POST (admin)
///
/// /menuitemreview                  GET ?id, PUT ?id, DELETE ?id
/// /menuitemreview/all              GET (user)
/// /menuitemreview/post             POST (admin)
///
/// /ucsbdiningcommonsmenuitems      GET ?id, PUT ?id, DELETE ?id
/// /ucsbdiningcommonsmenuitems/all  GET (user)
/// /ucsbdiningcommonsmenuitems/post POST (admin)
///
/// /ucsborganizations               GET ?orgCode, PUT ?orgCode, DELETE ?orgCode
/// /ucsborganizations/all           GET (user)
/// /ucsborganizations/post          POST (admin)
/// ```
///
/// Reads require the `user` role and writes the `admin` role.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/helprequest", help_request::router())
        .nest("/menuitemreview", menu_item_review::router())
        .nest(
            "/ucsbdiningcommonsmenuitems",
            ucsb_dining_commons_menu_item::router(),
        )
        .nest("/ucsborganizations", ucsb_organization::router())
}
