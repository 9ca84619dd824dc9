//! Repository for the `menu_item_reviews` table.
//!
//! Review ids are supplied by the caller, so creation is an insert-or-replace.
//! Updates only ever touch an existing row.

use sqlx::PgPool;
use ucsb_core::types::DbId;

use crate::models::menu_item_review::{CreateMenuItemReview, MenuItemReview};

const COLUMNS: &str = "id, item_id, review_email, stars, date_reviewed, comments";

const UPSERT: &str = "\
    INSERT INTO menu_item_reviews \
        (id, item_id, review_email, stars, date_reviewed, comments) \
    VALUES ($1, $2, $3, $4, $5, $6) \
    ON CONFLICT (id) DO UPDATE SET \
        item_id = EXCLUDED.item_id, \
        review_email = EXCLUDED.review_email, \
        stars = EXCLUDED.stars, \
        date_reviewed = EXCLUDED.date_reviewed, \
        comments = EXCLUDED.comments";

pub struct MenuItemReviewRepo;

impl MenuItemReviewRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<MenuItemReview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_item_reviews ORDER BY id");
        sqlx::query_as::<_, MenuItemReview>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MenuItemReview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_item_reviews WHERE id = $1");
        sqlx::query_as::<_, MenuItemReview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a review under its supplied id, replacing any review with that id.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateMenuItemReview,
    ) -> Result<MenuItemReview, sqlx::Error> {
        let query = format!("{UPSERT} RETURNING {COLUMNS}");
        sqlx::query_as::<_, MenuItemReview>(&query)
            .bind(dto.id)
            .bind(dto.item_id)
            .bind(&dto.review_email)
            .bind(dto.stars)
            .bind(dto.date_reviewed)
            .bind(&dto.comments)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of an existing review; `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        record: &MenuItemReview,
    ) -> Result<Option<MenuItemReview>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_item_reviews SET \
                 item_id = $2, review_email = $3, stars = $4, \
                 date_reviewed = $5, comments = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItemReview>(&query)
            .bind(record.id)
            .bind(record.item_id)
            .bind(&record.review_email)
            .bind(record.stars)
            .bind(record.date_reviewed)
            .bind(&record.comments)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_item_reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
