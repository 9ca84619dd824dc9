//! Handlers for the `/menuitemreview` resource.
//!
//! The review id is part of the create parameters; creating under an id that
//! already exists replaces that review.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use ucsb_core::types::{parse_local_timestamp, DbId};
use ucsb_db::models::menu_item_review::{
    CreateMenuItemReview, MenuItemReview, UpdateMenuItemReview,
};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::{IdParams, JsonBody, QueryParams, RequestParams};
use crate::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemReviewParams {
    pub id: DbId,
    pub item_id: DbId,
    pub review_email: String,
    pub stars: i32,
    pub date_reviewed: String,
    pub comments: String,
}

impl CreateMenuItemReviewParams {
    fn into_draft(self) -> AppResult<CreateMenuItemReview> {
        Ok(CreateMenuItemReview {
            date_reviewed: parse_local_timestamp("dateReviewed", &self.date_reviewed)?,
            id: self.id,
            item_id: self.item_id,
            review_email: self.review_email,
            stars: self.stars,
            comments: self.comments,
        })
    }
}

/// GET /api/menuitemreview/all
pub async fn list_all(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MenuItemReview>>> {
    let reviews = resource::list_all::<MenuItemReview>(&state.stores).await?;
    Ok(Json(reviews))
}

/// GET /api/menuitemreview?id=
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MenuItemReview>> {
    let review = resource::find_or_404::<MenuItemReview>(&state.stores, &params.id).await?;
    Ok(Json(review))
}

/// POST /api/menuitemreview/post
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    RequestParams(params): RequestParams<CreateMenuItemReviewParams>,
) -> AppResult<Json<MenuItemReview>> {
    let draft = params.into_draft()?;
    let review = resource::create::<MenuItemReview>(&state.stores, draft).await?;

    tracing::info!(
        review_id = review.id,
        item_id = review.item_id,
        user = %admin.email,
        "Menu item review saved"
    );

    Ok(Json(review))
}

/// PUT /api/menuitemreview?id=
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
    JsonBody(body): JsonBody<UpdateMenuItemReview>,
) -> AppResult<Json<MenuItemReview>> {
    let review = resource::update::<MenuItemReview>(&state.stores, &params.id, body).await?;

    tracing::info!(review_id = params.id, user = %admin.email, "Menu item review updated");

    Ok(Json(review))
}

/// DELETE /api/menuitemreview?id=
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let confirmation = resource::delete::<MenuItemReview>(&state.stores, &params.id).await?;

    tracing::info!(review_id = params.id, user = %admin.email, "Menu item review deleted");

    Ok(Json(confirmation))
}
