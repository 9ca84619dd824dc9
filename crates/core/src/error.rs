use crate::key::EntityKey;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: EntityKey,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl Into<EntityKey>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
