use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ucsb_core::key::EntityKey;
use ucsb_core::types::DbId;

use crate::store::{EntityStore, Stores};

/// A record type with a unique key, exposed as a CRUD resource.
///
/// `Draft` is everything a create call supplies; `Changes` is the full
/// replacement body of an update and never contains the key.
pub trait Entity: Clone + Send + Sync + Serialize + 'static {
    /// Name used in "not found" and "deleted" messages.
    const NAME: &'static str;

    type Key: Clone + Ord + Display + Into<EntityKey> + Send + Sync + 'static;
    type Draft: Send + 'static;
    type Changes: DeserializeOwned + Send + 'static;

    fn key(&self) -> Self::Key;

    /// Overwrite every mutable field with `changes`. The key is left alone.
    fn apply(&mut self, changes: Self::Changes);

    /// Build a record from a draft. Entities with generated keys call
    /// `next_id`; entities whose key is supplied by the caller ignore it.
    fn materialize(draft: Self::Draft, next_id: impl FnOnce() -> DbId) -> Self;

    /// Pick this entity's store out of the injected set.
    fn select(stores: &Stores) -> &dyn EntityStore<Self>;
}
