//! Repository for the `ucsb_dining_commons_menu_items` table.

use sqlx::PgPool;
use ucsb_core::types::DbId;

use crate::models::ucsb_dining_commons_menu_item::{
    CreateUcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItem,
};

/// Column list for `ucsb_dining_commons_menu_items` queries.
const COLUMNS: &str = "id, dining_commons_code, name, station";

/// Provides data access for dining-commons menu items.
pub struct UcsbDiningCommonsMenuItemRepo;

impl UcsbDiningCommonsMenuItemRepo {
    /// List every menu item, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_dining_commons_menu_items ORDER BY id");
        sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a menu item by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_dining_commons_menu_items WHERE id = $1");
        sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new menu item, returning it with its generated id.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateUcsbDiningCommonsMenuItem,
    ) -> Result<UcsbDiningCommonsMenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO ucsb_dining_commons_menu_items (dining_commons_code, name, station) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(&query)
            .bind(&dto.dining_commons_code)
            .bind(&dto.name)
            .bind(&dto.station)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of an existing menu item.
    ///
    /// Returns `None` if no row has `record.id`.
    pub async fn update(
        pool: &PgPool,
        record: &UcsbDiningCommonsMenuItem,
    ) -> Result<Option<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE ucsb_dining_commons_menu_items \
             SET dining_commons_code = $2, name = $3, station = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(&query)
            .bind(record.id)
            .bind(&record.dining_commons_code)
            .bind(&record.name)
            .bind(&record.station)
            .fetch_optional(pool)
            .await
    }

    /// Delete a menu item by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ucsb_dining_commons_menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
