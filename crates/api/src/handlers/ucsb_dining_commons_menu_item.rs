//! Handlers for the `/ucsbdiningcommonsmenuitems` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use ucsb_db::models::ucsb_dining_commons_menu_item::{
    CreateUcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItem, UpdateUcsbDiningCommonsMenuItem,
};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::{IdParams, JsonBody, QueryParams, RequestParams};
use crate::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl From<CreateMenuItemParams> for CreateUcsbDiningCommonsMenuItem {
    fn from(params: CreateMenuItemParams) -> Self {
        CreateUcsbDiningCommonsMenuItem {
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }
}

/// GET /api/ucsbdiningcommonsmenuitems/all
pub async fn list_all(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UcsbDiningCommonsMenuItem>>> {
    let items = resource::list_all::<UcsbDiningCommonsMenuItem>(&state.stores).await?;
    Ok(Json(items))
}

/// GET /api/ucsbdiningcommonsmenuitems?id=
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<UcsbDiningCommonsMenuItem>> {
    let item =
        resource::find_or_404::<UcsbDiningCommonsMenuItem>(&state.stores, &params.id).await?;
    Ok(Json(item))
}

/// POST /api/ucsbdiningcommonsmenuitems/post
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    RequestParams(params): RequestParams<CreateMenuItemParams>,
) -> AppResult<Json<UcsbDiningCommonsMenuItem>> {
    let item =
        resource::create::<UcsbDiningCommonsMenuItem>(&state.stores, params.into()).await?;

    tracing::info!(
        menu_item_id = item.id,
        dining_commons_code = %item.dining_commons_code,
        user = %admin.email,
        "Menu item created"
    );

    Ok(Json(item))
}

/// PUT /api/ucsbdiningcommonsmenuitems?id=
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
    JsonBody(body): JsonBody<UpdateUcsbDiningCommonsMenuItem>,
) -> AppResult<Json<UcsbDiningCommonsMenuItem>> {
    let item =
        resource::update::<UcsbDiningCommonsMenuItem>(&state.stores, &params.id, body).await?;

    tracing::info!(menu_item_id = params.id, user = %admin.email, "Menu item updated");

    Ok(Json(item))
}

/// DELETE /api/ucsbdiningcommonsmenuitems?id=
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let confirmation =
        resource::delete::<UcsbDiningCommonsMenuItem>(&state.stores, &params.id).await?;

    tracing::info!(menu_item_id = params.id, user = %admin.email, "Menu item deleted");

    Ok(Json(confirmation))
}
