//! The CRUD sequence shared by every resource, written once over [`Entity`].
//!
//! Handlers parse their parameters, then call into here with the injected
//! [`Stores`]. Each function is a thin composition of store calls plus the
//! find-or-404 rule.

use ucsb_core::error::CoreError;
use ucsb_db::{Entity, Stores};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;

/// Every stored record of `E`.
pub async fn list_all<E: Entity>(stores: &Stores) -> AppResult<Vec<E>> {
    Ok(stores.of::<E>().find_all().await?)
}

/// The record under `key`, or `NotFound` naming the entity and key.
pub async fn find_or_404<E: Entity>(stores: &Stores, key: &E::Key) -> AppResult<E> {
    stores
        .of::<E>()
        .find_by_key(key)
        .await?
        .ok_or_else(|| not_found::<E>(key))
}

pub async fn create<E: Entity>(stores: &Stores, draft: E::Draft) -> AppResult<E> {
    Ok(stores.of::<E>().create(draft).await?)
}

/// Overwrite every mutable field of the record under `key` and persist it.
pub async fn update<E: Entity>(
    stores: &Stores,
    key: &E::Key,
    changes: E::Changes,
) -> AppResult<E> {
    let mut record = find_or_404::<E>(stores, key).await?;
    record.apply(changes);
    // A delete racing this update leaves nothing to overwrite.
    stores
        .of::<E>()
        .update(&record)
        .await?
        .ok_or_else(|| not_found::<E>(key))
}

/// Remove the record under `key`, answering with a confirmation message.
pub async fn delete<E: Entity>(stores: &Stores, key: &E::Key) -> AppResult<MessageResponse> {
    if !stores.of::<E>().delete(key).await? {
        return Err(not_found::<E>(key));
    }
    Ok(MessageResponse::new(format!(
        "{} with id {} deleted",
        E::NAME,
        key
    )))
}

fn not_found<E: Entity>(key: &E::Key) -> AppError {
    AppError::Core(CoreError::not_found(E::NAME, key.clone()))
}
