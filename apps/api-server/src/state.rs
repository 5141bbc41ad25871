//! Application state - shared across all handlers.

use std::sync::Arc;

use postline_core::ports::{PostStore, PublishGateway};
use postline_infra::gateway::MockGateway;
use postline_infra::store::{JsonFileStore, MemoryStore};

use crate::config::AppConfig;

/// Shared application state.
///
/// The store is the single owner of the post sequence in this process;
/// handlers receive it by injection, never through ambient state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub gateway: Arc<dyn PublishGateway>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = match &config.data_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using JSON file store");
                Arc::new(JsonFileStore::new(path.clone()))
            }
            None => {
                tracing::warn!(
                    "POSTLINE_DATA_PATH not set. Posts are kept in memory only."
                );
                Arc::new(MemoryStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Self {
            store,
            gateway: Arc::new(MockGateway::new()),
        }
    }
}
