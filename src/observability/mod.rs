//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and upstream client produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the tower-http trace span
//! - API credentials are never logged

pub mod logging;
pub mod metrics;
