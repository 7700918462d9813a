//! HTTP middleware.

pub mod proxy;

pub use proxy::{proxy_fix_middleware, ForwardedInfo};
