use std::fmt;

use serde::Serialize;

use crate::types::DbId;

/// The unique identifier of a record: a numeric id or a string code.
///
/// Only used where keys of different entities meet (error messages, logs);
/// each entity otherwise works with its own concrete key type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EntityKey {
    Id(DbId),
    Code(String),
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Id(id) => write!(f, "{id}"),
            EntityKey::Code(code) => f.write_str(code),
        }
    }
}

impl From<DbId> for EntityKey {
    fn from(id: DbId) -> Self {
        EntityKey::Id(id)
    }
}

impl From<String> for EntityKey {
    fn from(code: String) -> Self {
        EntityKey::Code(code)
    }
}

impl From<&str> for EntityKey {
    fn from(code: &str) -> Self {
        EntityKey::Code(code.to_string())
    }
}
