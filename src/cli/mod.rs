//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `check` - Environment validation

pub mod args;

pub use args::{Cli, Commands};
