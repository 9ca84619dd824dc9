//! Student organizations, keyed by their short organization code.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ucsb_core::types::DbId;

use crate::entity::Entity;
use crate::store::{EntityStore, Stores};

/// A row from the `ucsb_organizations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// DTO for creating an organization under a caller-chosen code.
#[derive(Debug, Clone)]
pub struct CreateUcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Full replacement body for an update. `orgCode` is immutable, so a code in
/// the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUcsbOrganization {
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for UcsbOrganization {
    const NAME: &'static str = "UCSBOrganizations";

    type Key = String;
    type Draft = CreateUcsbOrganization;
    type Changes = UpdateUcsbOrganization;

    fn key(&self) -> String {
        self.org_code.clone()
    }

    fn apply(&mut self, changes: UpdateUcsbOrganization) {
        self.org_translation_short = changes.org_translation_short;
        self.org_translation = changes.org_translation;
        self.inactive = changes.inactive;
    }

    fn materialize(draft: CreateUcsbOrganization, _next_id: impl FnOnce() -> DbId) -> Self {
        UcsbOrganization {
            org_code: draft.org_code,
            org_translation_short: draft.org_translation_short,
            org_translation: draft.org_translation,
            inactive: draft.inactive,
        }
    }

    fn select(stores: &Stores) -> &dyn EntityStore<Self> {
        stores.organizations.as_ref()
    }
}
