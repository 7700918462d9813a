//! appstack - web application bootstrap service
//!
//! Validates the deployment environment, wires the database connection and
//! upload storage, and serves the HTTP surface behind a reverse proxy.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **infra**: Infrastructure concerns (database, migrations)
//! - **api**: HTTP routes, middleware, and shared state
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Validate the environment
//! cargo run -- check
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, ConfigError, Environment};
pub use errors::{AppError, AppResult};
pub use infra::Database;
