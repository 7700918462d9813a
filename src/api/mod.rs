//! API layer - HTTP routing and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Route definitions and the health surface
//! - Middleware (proxy fix, request tracing)
//! - Shared application state

pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
