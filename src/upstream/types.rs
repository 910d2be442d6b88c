//! Exercise API payloads and upstream error definitions.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Summary record used by listings and search results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExerciseList {
    pub id: i64,
    pub name: String,
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExerciseResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub count: i64,
    #[serde(rename = "results")]
    pub exercises: Vec<ExerciseList>,
}

/// Full exercise record, requested with `detail=true`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExerciseDetail {
    pub id: i64,
    pub name: String,
    #[serde(rename = "primaryMuscles")]
    pub primary_muscles: Vec<String>,
    pub category: Option<String>,
    pub force: Option<String>,
    pub grips: Vec<String>,
    pub mechanic: Option<String>,
    pub difficulty: Option<String>,
    pub steps: Vec<String>,
    pub videos: Vec<ExerciseVideo>,
    pub video_count: i64,
    pub step_count: i64,
}

/// One demonstration video of an exercise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExerciseVideo {
    pub url: String,
    pub angle: String,
    pub gender: String,
    pub og_image: String,
}

/// Errors that can occur while talking to the exercise API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request URL could not be assembled.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection, TLS or timeout failure.
    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON.
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Request(e) if e.is_timeout())
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
