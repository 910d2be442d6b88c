//! Exercise Gateway Library
//!
//! A thin REST gateway in front of a third-party exercise database. It
//! forwards listings, search and detail lookups as JSON and relays video
//! byte ranges with the provider's credentials injected.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
