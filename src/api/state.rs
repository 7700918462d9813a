//! Application state shared across request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;

/// Application state containing shared infrastructure.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub database: Arc<Database>,
    /// Loaded application configuration
    pub config: Config,
}

impl AppState {
    pub fn new(database: Arc<Database>, config: Config) -> Self {
        Self { database, config }
    }
}
