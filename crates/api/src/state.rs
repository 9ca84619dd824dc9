use std::sync::Arc;

use ucsb_db::Stores;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// One store per entity type; PostgreSQL-backed in production.
    pub stores: Stores,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
}
