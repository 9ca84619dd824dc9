use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use ucsb_core::types::DbId;

use crate::entity::Entity;
use crate::store::EntityStore;

/// An in-process table for one entity type.
///
/// Rows are kept in key order; generated ids start at 1 and are never
/// reused, mirroring a BIGSERIAL column.
pub struct MemoryTable<E: Entity> {
    state: RwLock<TableState<E>>,
}

struct TableState<E: Entity> {
    rows: BTreeMap<E::Key, E>,
    last_id: DbId,
}

impl<E: Entity> Default for MemoryTable<E> {
    fn default() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryTable<E> {
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_key(&self, key: &E::Key) -> Result<Option<E>, sqlx::Error> {
        Ok(self.state.read().await.rows.get(key).cloned())
    }

    async fn create(&self, draft: E::Draft) -> Result<E, sqlx::Error> {
        let mut guard = self.state.write().await;
        let TableState { rows, last_id } = &mut *guard;

        let record = E::materialize(draft, || {
            *last_id += 1;
            *last_id
        });
        rows.insert(record.key(), record.clone());
        Ok(record)
    }

    async fn update(&self, record: &E) -> Result<Option<E>, sqlx::Error> {
        let mut guard = self.state.write().await;
        Ok(guard.rows.get_mut(&record.key()).map(|stored| {
            *stored = record.clone();
            stored.clone()
        }))
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, sqlx::Error> {
        Ok(self.state.write().await.rows.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ucsb_dining_commons_menu_item::{
        CreateUcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItem,
    };
    use crate::models::ucsb_organization::{CreateUcsbOrganization, UcsbOrganization};

    fn menu_item(name: &str) -> CreateUcsbDiningCommonsMenuItem {
        CreateUcsbDiningCommonsMenuItem {
            dining_commons_code: "ortega".into(),
            name: name.into(),
            station: "Entrees".into(),
        }
    }

    fn org(code: &str, translation: &str) -> CreateUcsbOrganization {
        CreateUcsbOrganization {
            org_code: code.into(),
            org_translation_short: translation.into(),
            org_translation: translation.into(),
            inactive: false,
        }
    }

    #[tokio::test]
    async fn generated_ids_are_sequential_and_not_reused() {
        let table = MemoryTable::<UcsbDiningCommonsMenuItem>::default();

        let first = table.create(menu_item("Tofu Banh Mi")).await.unwrap();
        let second = table.create(menu_item("Chicken Caesar Salad")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(table.delete(&second.id).await.unwrap());
        let third = table.create(menu_item("Cream of Broccoli Soup")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn create_with_existing_code_replaces() {
        let table = MemoryTable::<UcsbOrganization>::default();

        table.create(org("ZPR", "ZETA PHI RHO")).await.unwrap();
        table.create(org("ZPR", "ZETA PHI RHO SORORITY")).await.unwrap();

        let all = table.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].org_translation, "ZETA PHI RHO SORORITY");
    }

    #[tokio::test]
    async fn update_of_deleted_record_does_not_reinsert() {
        let table = MemoryTable::<UcsbDiningCommonsMenuItem>::default();
        let mut item = table.create(menu_item("Pho")).await.unwrap();
        assert!(table.delete(&item.id).await.unwrap());

        item.name = "Pho Ga".into();
        assert!(table.update(&item).await.unwrap().is_none());
        assert!(table.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_existing_record() {
        let table = MemoryTable::<UcsbDiningCommonsMenuItem>::default();
        let mut item = table.create(menu_item("Pho")).await.unwrap();

        item.name = "Pho Ga".into();
        let updated = table.update(&item).await.unwrap();

        assert_eq!(updated.as_ref(), Some(&item));
        assert_eq!(table.find_by_key(&item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn delete_missing_key_reports_false() {
        let table = MemoryTable::<UcsbOrganization>::default();
        assert!(!table.delete(&"NONE".to_string()).await.unwrap());
        assert!(table.find_by_key(&"NONE".to_string()).await.unwrap().is_none());
    }
}
