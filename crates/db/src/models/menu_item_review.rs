//! Reviews of dining-commons menu items.
//!
//! Unlike the other records, a review's id is chosen by the caller on create.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ucsb_core::types::{deserialize_local_timestamp, DbId, LocalTimestamp};

use crate::entity::Entity;
use crate::store::{EntityStore, Stores};

/// A row from the `menu_item_reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    pub id: DbId,
    pub item_id: DbId,
    pub review_email: String,
    pub stars: i32,
    pub date_reviewed: LocalTimestamp,
    pub comments: String,
}

/// DTO for creating a review, including its caller-supplied id.
#[derive(Debug, Clone)]
pub struct CreateMenuItemReview {
    pub id: DbId,
    pub item_id: DbId,
    pub review_email: String,
    pub stars: i32,
    pub date_reviewed: LocalTimestamp,
    pub comments: String,
}

/// Full replacement body for an update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemReview {
    pub item_id: DbId,
    pub review_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "deserialize_local_timestamp")]
    pub date_reviewed: LocalTimestamp,
    pub comments: String,
}

impl Entity for MenuItemReview {
    const NAME: &'static str = "MenuItemReviews";

    type Key = DbId;
    type Draft = CreateMenuItemReview;
    type Changes = UpdateMenuItemReview;

    fn key(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, changes: UpdateMenuItemReview) {
        self.item_id = changes.item_id;
        self.review_email = changes.review_email;
        self.stars = changes.stars;
        self.date_reviewed = changes.date_reviewed;
        self.comments = changes.comments;
    }

    fn materialize(draft: CreateMenuItemReview, _next_id: impl FnOnce() -> DbId) -> Self {
        MenuItemReview {
            id: draft.id,
            item_id: draft.item_id,
            review_email: draft.review_email,
            stars: draft.stars,
            date_reviewed: draft.date_reviewed,
            comments: draft.comments,
        }
    }

    fn select(stores: &Stores) -> &dyn EntityStore<Self> {
        stores.menu_item_reviews.as_ref()
    }
}
