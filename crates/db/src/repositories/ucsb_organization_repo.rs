//! Repository for the `ucsb_organizations` table.
//!
//! Keyed by `org_code`, which is never rewritten once a row exists.

use sqlx::PgPool;

use crate::models::ucsb_organization::{CreateUcsbOrganization, UcsbOrganization};

const COLUMNS: &str = "org_code, org_translation_short, org_translation, inactive";

const UPSERT: &str = "\
    INSERT INTO ucsb_organizations \
        (org_code, org_translation_short, org_translation, inactive) \
    VALUES ($1, $2, $3, $4) \
    ON CONFLICT (org_code) DO UPDATE SET \
        org_translation_short = EXCLUDED.org_translation_short, \
        org_translation = EXCLUDED.org_translation, \
        inactive = EXCLUDED.inactive";

/// Provides data access for student organizations.
pub struct UcsbOrganizationRepo;

impl UcsbOrganizationRepo {
    /// List every organization, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<UcsbOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_organizations ORDER BY org_code");
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_code(
        pool: &PgPool,
        org_code: &str,
    ) -> Result<Option<UcsbOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ucsb_organizations WHERE org_code = $1");
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .bind(org_code)
            .fetch_optional(pool)
            .await
    }

    /// Insert an organization, replacing any organization with the same code.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateUcsbOrganization,
    ) -> Result<UcsbOrganization, sqlx::Error> {
        let query = format!("{UPSERT} RETURNING {COLUMNS}");
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .bind(&dto.org_code)
            .bind(&dto.org_translation_short)
            .bind(&dto.org_translation)
            .bind(dto.inactive)
            .fetch_one(pool)
            .await
    }

    /// Replace the non-key columns of an existing organization.
    ///
    /// Returns `None` if no row has `record.org_code`.
    pub async fn update(
        pool: &PgPool,
        record: &UcsbOrganization,
    ) -> Result<Option<UcsbOrganization>, sqlx::Error> {
        let query = format!(
            "UPDATE ucsb_organizations SET \
                 org_translation_short = $2, org_translation = $3, inactive = $4 \
             WHERE org_code = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UcsbOrganization>(&query)
            .bind(&record.org_code)
            .bind(&record.org_translation_short)
            .bind(&record.org_translation)
            .bind(record.inactive)
            .fetch_optional(pool)
            .await
    }

    /// Delete an organization by code.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, org_code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ucsb_organizations WHERE org_code = $1")
            .bind(org_code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
