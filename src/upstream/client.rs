//! Exercise API client.
//!
//! # Responsibilities
//! - Attach the RapidAPI credential headers to every call
//! - Apply the metadata (10s) or video (60s) timeout per request
//! - Decode JSON payloads, or hand back the raw response for video relaying

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, RANGE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::query;
use crate::upstream::types::{
    ExerciseDetail, ExerciseList, ExerciseResponse, UpstreamError, UpstreamResult,
};

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Client for the third-party exercise database.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ExerciseApi {
    http: Client,
    base_url: Url,
    credentials: HeaderMap,
    config: UpstreamConfig,
}

/// Errors raised while building the client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("credential is not a valid header value: {0}")]
    Credential(#[from] InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl ExerciseApi {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(&config.base_url)?;

        let mut credentials = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        credentials.insert(API_KEY_HEADER, key);
        credentials.insert(API_HOST_HEADER, HeaderValue::from_str(&config.api_host)?);

        let mut builder =
            Client::builder().user_agent(concat!("exercise-gateway/", env!("CARGO_PKG_VERSION")));
        // Local upstreams (mocks, sidecars) are never reached through a proxy.
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            credentials,
            config: config.clone(),
        })
    }

    /// Paginated exercise listing.
    pub async fn exercise_listings(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> UpstreamResult<ExerciseResponse> {
        let url = query::listings_url(&self.base_url, limit, offset)?;
        self.get_json("listings", url).await
    }

    /// Search by name. Terms under three characters are not forwarded.
    pub async fn exercise_search(
        &self,
        limit: Option<u32>,
        search: Option<&str>,
    ) -> UpstreamResult<Vec<ExerciseList>> {
        let url = query::search_url(&self.base_url, limit, search)?;
        self.get_json("search", url).await
    }

    /// Full detail for one exercise.
    pub async fn exercise_detail(&self, id: &str) -> UpstreamResult<ExerciseDetail> {
        let url = query::detail_url(&self.base_url, id)?;
        self.get_json("detail", url).await
    }

    /// Fetch a video, forwarding the caller's `Range` header unchanged.
    ///
    /// The response is returned whatever its status so the caller can mirror
    /// it; only transport failures are errors here.
    pub async fn fetch_video(&self, path: &str, range: Option<&HeaderValue>) -> UpstreamResult<Response> {
        let url = query::video_url(&self.base_url, path)?;

        let mut request = self
            .http
            .get(url)
            .headers(self.credentials.clone())
            .timeout(self.config.video_timeout());
        if let Some(range) = range {
            request = request.header(RANGE, range.clone());
        }

        let start = Instant::now();
        let result = request.send().await;
        metrics::record_upstream("video", start);

        result.map_err(UpstreamError::Request)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: Url) -> UpstreamResult<T> {
        tracing::debug!(endpoint, url = %url, "Calling upstream");

        let start = Instant::now();
        let response = self
            .http
            .get(url)
            .headers(self.credentials.clone())
            .timeout(self.config.metadata_timeout())
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        let status = response.status();
        if !status.is_success() {
            metrics::record_upstream(endpoint, start);
            return Err(UpstreamError::Status(status));
        }

        let payload = response.json::<T>().await.map_err(UpstreamError::Decode);
        metrics::record_upstream(endpoint, start);
        payload
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
