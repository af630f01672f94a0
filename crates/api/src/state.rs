use std::sync::Arc;

use folio_store::JsonStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// JSON collection files under the data directory.
    pub store: JsonStore,
    /// Server configuration (static root, timeouts).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = JsonStore::open(config.data_dir.clone());
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
