//! Client-facing error mapping.
//!
//! Every failure becomes a JSON `{"message": ...}` body with a generic text.
//! Upstream detail goes to the log, never to the client.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// JSON body shared by the greeting and every error response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler failure, rendered as a status plus [`MessageBody`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input was unusable.
    #[error("{0}")]
    BadRequest(&'static str),

    /// The upstream call could not be completed or decoded.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// Upstream answered with an error status that is passed through as-is.
    #[error("{message} (upstream status {status})")]
    UpstreamStatus {
        status: StatusCode,
        message: &'static str,
    },
}

impl ApiError {
    pub fn upstream(message: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| ApiError::Upstream { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamStatus { status, .. } => *status,
        }
    }

    /// Text shown to the client.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::Upstream { message, .. }
            | ApiError::UpstreamStatus { message, .. } => *message,
        }
    }
}

pub const INVALID_QUERY: &str = "Invalid query parameters";

// The parser's wording stays in the log; clients get the generic message.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Query string rejected");
        ApiError::BadRequest(INVALID_QUERY)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(message) => {
                tracing::warn!(reason = *message, "Rejected request");
            }
            ApiError::Upstream { message, source } => {
                tracing::error!(
                    error = %source,
                    timeout = source.is_timeout(),
                    "{}", message
                );
            }
            ApiError::UpstreamStatus { status, message } => {
                tracing::error!(status = status.as_u16(), "{}", message);
            }
        }

        (self.status(), Json(MessageBody::new(self.message()))).into_response()
    }
}
