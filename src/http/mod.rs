//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace span)
//!     → handlers.rs / video.rs (parameters → upstream call)
//!     → response.rs (errors → status + JSON message)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod video;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, MessageBody};
pub use server::{AppState, HttpServer};
