//! Listing, search and detail endpoints.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Deserializer};

use crate::http::response::{ApiError, MessageBody};
use crate::http::server::AppState;
use crate::upstream::{ExerciseDetail, ExerciseList, ExerciseResponse};

/// Query parameters of `GET /exercises`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<u32>,
    /// Accepted for client compatibility; the listing endpoint does not filter.
    pub search: Option<String>,
}

/// Query parameters of `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u32>,
    pub search: Option<String>,
}

/// `?limit=` means "not given", not "invalid".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// `GET /`
pub async fn root() -> Json<MessageBody> {
    Json(MessageBody::new("Hello world!!"))
}

/// `GET /api/v1/exercises`
pub async fn get_exercise_listings(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let Query(params) = params?;
    if let Some(search) = params.search.as_deref() {
        tracing::debug!(search, "Listing ignores search term");
    }

    let listings = state
        .api
        .exercise_listings(params.limit, params.offset)
        .await
        .map_err(ApiError::upstream("Failed to get exercise listings"))?;

    Ok(Json(listings))
}

/// `GET /api/v1/search`
pub async fn get_exercise_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<ExerciseList>>, ApiError> {
    let Query(params) = params?;
    let results = state
        .api
        .exercise_search(params.limit, params.search.as_deref())
        .await
        .map_err(ApiError::upstream("Failed to get exercise search"))?;

    Ok(Json(results))
}

/// `GET /api/v1/exercises/{id}`
pub async fn get_exercise_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseDetail>, ApiError> {
    let detail = state
        .api
        .exercise_detail(&id)
        .await
        .map_err(ApiError::upstream("Failed to get exercise detail"))?;

    Ok(Json(detail))
}
