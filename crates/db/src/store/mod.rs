//! The store collaborator handed to every request handler.
//!
//! [`EntityStore`] is the per-entity CRUD contract; [`Stores`] bundles one
//! store per entity and is what the HTTP layer carries in its state. Two
//! backends exist: PostgreSQL ([`postgres::PgStore`]) and an in-process
//! [`memory::MemoryTable`] used by tests and throwaway local runs.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::Entity;
use crate::models::help_request::HelpRequest;
use crate::models::menu_item_review::MenuItemReview;
use crate::models::ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem;
use crate::models::ucsb_organization::UcsbOrganization;
use crate::DbPool;

use self::memory::MemoryTable;
use self::postgres::PgStore;

/// CRUD access to the records of one entity type.
///
/// Every method is a single store operation; callers compose them.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every stored record, in store order.
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error>;

    async fn find_by_key(&self, key: &E::Key) -> Result<Option<E>, sqlx::Error>;

    /// Persist a new record, assigning or accepting its key.
    async fn create(&self, draft: E::Draft) -> Result<E, sqlx::Error>;

    /// Overwrite the stored record under `record.key()`.
    ///
    /// Returns `None`, and stores nothing, if no record has that key.
    async fn update(&self, record: &E) -> Result<Option<E>, sqlx::Error>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, key: &E::Key) -> Result<bool, sqlx::Error>;
}

/// One store per entity type, cheaply cloneable.
#[derive(Clone)]
pub struct Stores {
    pub help_requests: Arc<dyn EntityStore<HelpRequest>>,
    pub menu_item_reviews: Arc<dyn EntityStore<MenuItemReview>>,
    pub dining_commons_menu_items: Arc<dyn EntityStore<UcsbDiningCommonsMenuItem>>,
    pub organizations: Arc<dyn EntityStore<UcsbOrganization>>,
    pool: Option<DbPool>,
}

impl Stores {
    /// Back every entity with its PostgreSQL table.
    pub fn postgres(pool: DbPool) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self {
            help_requests: store.clone(),
            menu_item_reviews: store.clone(),
            dining_commons_menu_items: store.clone(),
            organizations: store,
            pool: Some(pool),
        }
    }

    /// Back every entity with an empty in-process table.
    pub fn in_memory() -> Self {
        Self {
            help_requests: Arc::new(MemoryTable::<HelpRequest>::default()),
            menu_item_reviews: Arc::new(MemoryTable::<MenuItemReview>::default()),
            dining_commons_menu_items: Arc::new(MemoryTable::<UcsbDiningCommonsMenuItem>::default()),
            organizations: Arc::new(MemoryTable::<UcsbOrganization>::default()),
            pool: None,
        }
    }

    /// The store for entity `E`.
    pub fn of<E: Entity>(&self) -> &dyn EntityStore<E> {
        E::select(self)
    }

    /// Short backend name for logs and the health endpoint.
    pub fn backend(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Check the backing database, if any, is reachable.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        match &self.pool {
            Some(pool) => crate::health_check(pool).await,
            None => Ok(()),
        }
    }
}
