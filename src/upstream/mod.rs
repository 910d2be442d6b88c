//! Upstream exercise API access.
//!
//! # Data Flow
//! ```text
//! handler parameters
//!     → query.rs (base URL + path + query string)
//!     → client.rs (credential headers, timeout, send)
//!     → types.rs (decoded DTO) or raw response (video)
//! ```
//!
//! # Design Decisions
//! - One reqwest client for the whole process
//! - No retries: a single upstream failure is terminal for that request

pub mod client;
pub mod query;
pub mod types;

pub use client::{ClientBuildError, ExerciseApi};
pub use types::{
    ExerciseDetail, ExerciseList, ExerciseResponse, ExerciseVideo, UpstreamError, UpstreamResult,
};
