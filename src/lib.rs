pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::Store;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// In-memory entity stores. State lives for the process lifetime only
    /// and is lost on restart.
    pub store: Arc<Store>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            store: Arc::new(Store::new()),
            started_at: std::time::Instant::now(),
        }
    }
}
