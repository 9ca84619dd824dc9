use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ucsb_core::types::DbId;

use crate::entity::Entity;
use crate::store::{EntityStore, Stores};

/// A row from the `ucsb_dining_commons_menu_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    pub id: DbId,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Clone)]
pub struct CreateUcsbDiningCommonsMenuItem {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUcsbDiningCommonsMenuItem {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for UcsbDiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";

    type Key = DbId;
    type Draft = CreateUcsbDiningCommonsMenuItem;
    type Changes = UpdateUcsbDiningCommonsMenuItem;

    fn key(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, changes: UpdateUcsbDiningCommonsMenuItem) {
        self.dining_commons_code = changes.dining_commons_code;
        self.name = changes.name;
        self.station = changes.station;
    }

    fn materialize(
        draft: CreateUcsbDiningCommonsMenuItem,
        next_id: impl FnOnce() -> DbId,
    ) -> Self {
        UcsbDiningCommonsMenuItem {
            id: next_id(),
            dining_commons_code: draft.dining_commons_code,
            name: draft.name,
            station: draft.station,
        }
    }

    fn select(stores: &Stores) -> &dyn EntityStore<Self> {
        stores.dining_commons_menu_items.as_ref()
    }
}
