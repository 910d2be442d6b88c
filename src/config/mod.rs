//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file, then environment overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc with the upstream client and handlers
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never reloaded
//! - All fields have defaults to allow minimal configs
//! - Credentials come from `RAPID_API_KEY` / `RAPID_API_HOST`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
