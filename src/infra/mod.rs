//! Infrastructure layer - External systems integration
//!
//! Currently covers database connection management and schema migrations.

pub mod db;

pub use db::{Database, Migrator};
