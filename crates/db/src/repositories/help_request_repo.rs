//! Repository for the `help_requests` table.

use sqlx::PgPool;
use ucsb_core::types::DbId;

use crate::models::help_request::{CreateHelpRequest, HelpRequest};

/// Column list for `help_requests` queries.
const COLUMNS: &str = "\
    id, requester_email, team_id, table_or_breakout_room, \
    request_time, explanation, solved";

/// Provides data access for help requests.
pub struct HelpRequestRepo;

impl HelpRequestRepo {
    /// List every help request, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<HelpRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM help_requests ORDER BY id");
        sqlx::query_as::<_, HelpRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a help request by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HelpRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM help_requests WHERE id = $1");
        sqlx::query_as::<_, HelpRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new help request, returning it with its generated id.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateHelpRequest,
    ) -> Result<HelpRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO help_requests \
                 (requester_email, team_id, table_or_breakout_room, \
                  request_time, explanation, solved) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HelpRequest>(&query)
            .bind(&dto.requester_email)
            .bind(&dto.team_id)
            .bind(&dto.table_or_breakout_room)
            .bind(dto.request_time)
            .bind(&dto.explanation)
            .bind(dto.solved)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of an existing help request.
    ///
    /// Returns `None` if no row has `record.id`; nothing is inserted.
    pub async fn update(
        pool: &PgPool,
        record: &HelpRequest,
    ) -> Result<Option<HelpRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE help_requests SET \
                 requester_email = $2, \
                 team_id = $3, \
                 table_or_breakout_room = $4, \
                 request_time = $5, \
                 explanation = $6, \
                 solved = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HelpRequest>(&query)
            .bind(record.id)
            .bind(&record.requester_email)
            .bind(&record.team_id)
            .bind(&record.table_or_breakout_room)
            .bind(record.request_time)
            .bind(&record.explanation)
            .bind(record.solved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a help request by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM help_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
