//! Help requests raised by student teams during lab sections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ucsb_core::types::{deserialize_local_timestamp, DbId, LocalTimestamp};

use crate::entity::Entity;
use crate::store::{EntityStore, Stores};

/// A row from the `help_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: DbId,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: LocalTimestamp,
    pub explanation: String,
    pub solved: bool,
}

/// DTO for creating a help request. The id is generated by the store.
#[derive(Debug, Clone)]
pub struct CreateHelpRequest {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: LocalTimestamp,
    pub explanation: String,
    pub solved: bool,
}

/// Full replacement body for an update. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHelpRequest {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "deserialize_local_timestamp")]
    pub request_time: LocalTimestamp,
    pub explanation: String,
    pub solved: bool,
}

impl Entity for HelpRequest {
    const NAME: &'static str = "HelpRequest";

    type Key = DbId;
    type Draft = CreateHelpRequest;
    type Changes = UpdateHelpRequest;

    fn key(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, changes: UpdateHelpRequest) {
        self.requester_email = changes.requester_email;
        self.team_id = changes.team_id;
        self.table_or_breakout_room = changes.table_or_breakout_room;
        self.request_time = changes.request_time;
        self.explanation = changes.explanation;
        self.solved = changes.solved;
    }

    fn materialize(draft: CreateHelpRequest, next_id: impl FnOnce() -> DbId) -> Self {
        HelpRequest {
            id: next_id(),
            requester_email: draft.requester_email,
            team_id: draft.team_id,
            table_or_breakout_room: draft.table_or_breakout_room,
            request_time: draft.request_time,
            explanation: draft.explanation,
            solved: draft.solved,
        }
    }

    fn select(stores: &Stores) -> &dyn EntityStore<Self> {
        stores.help_requests.as_ref()
    }
}
