//! Video proxy endpoint.
//!
//! Relays `GET /api/v1/videos/{*path}` to the upstream media store with
//! the gateway's credentials, forwarding `Range` so players can seek.
//!
//! # Design Decisions
//! - Upstream status ≥ 400 is mirrored with a generic body
//! - Status and the relayed headers are sent before the first body byte;
//!   the body itself is streamed, never buffered whole
//! - The upstream response is dropped (connection released) on every path,
//!   including client disconnects mid-stream

use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{
        header::{ACCEPT_RANGES, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE},
        HeaderMap, HeaderName, HeaderValue, StatusCode,
    },
    response::Response,
};
use futures_util::{stream::BoxStream, Stream, StreamExt};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Upstream headers copied onto the client response when present.
pub const RELAYED_HEADERS: [HeaderName; 4] = [CONTENT_TYPE, CONTENT_LENGTH, CONTENT_RANGE, ACCEPT_RANGES];

pub const VIDEO_CACHE_CONTROL: &str = "public, max-age=3600";

const PATH_REQUIRED: &str = "Video path is required";
const FETCH_FAILED: &str = "Failed to fetch video";
const UPSTREAM_FAILED: &str = "Failed to fetch video from upstream";

/// `GET /api/v1/videos/{*path}`
pub async fn proxy_video(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    relay_video(&state, &path, headers.get(RANGE)).await
}

/// `GET /api/v1/videos/` with nothing after the slash.
pub async fn video_path_missing() -> ApiError {
    ApiError::BadRequest(PATH_REQUIRED)
}

async fn relay_video(
    state: &AppState,
    path: &str,
    range: Option<&HeaderValue>,
) -> Result<Response, ApiError> {
    if path.trim_matches('/').is_empty() {
        return Err(ApiError::BadRequest(PATH_REQUIRED));
    }

    tracing::info!(path, range = ?range, "Proxying video request");

    let upstream = state
        .api
        .fetch_video(path, range)
        .await
        .map_err(ApiError::upstream(FETCH_FAILED))?;

    let status = upstream.status();
    if status.as_u16() >= 400 {
        return Err(ApiError::UpstreamStatus {
            status,
            message: UPSTREAM_FAILED,
        });
    }

    let mut response = Response::builder().status(status);
    if let Some(headers) = response.headers_mut() {
        copy_relayed_headers(upstream.headers(), headers);
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(VIDEO_CACHE_CONTROL));
    }

    let body = RelayStream::new(path.to_string(), upstream.bytes_stream().boxed());
    response.body(Body::from_stream(body)).map_err(|e| {
        tracing::error!(error = %e, "Failed to build video response");
        ApiError::UpstreamStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: FETCH_FAILED,
        }
    })
}

/// Copy the headers in [`RELAYED_HEADERS`] from `from` into `to`.
pub fn copy_relayed_headers(from: &HeaderMap, to: &mut HeaderMap) {
    for name in RELAYED_HEADERS.iter() {
        if let Some(value) = from.get(name) {
            to.insert(name.clone(), value.clone());
        }
    }
}

/// Passes upstream chunks through and logs the relayed total once the
/// stream is finished or abandoned.
struct RelayStream {
    path: String,
    inner: BoxStream<'static, reqwest::Result<Bytes>>,
    bytes: u64,
    failed: bool,
}

impl RelayStream {
    fn new(path: String, inner: BoxStream<'static, reqwest::Result<Bytes>>) -> Self {
        Self {
            path,
            inner,
            bytes: 0,
            failed: false,
        }
    }
}

impl Stream for RelayStream {
    type Item = reqwest::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let item = self.inner.poll_next_unpin(cx);
        match &item {
            Poll::Ready(Some(Ok(chunk))) => self.bytes += chunk.len() as u64,
            Poll::Ready(Some(Err(e))) => {
                tracing::error!(path = %self.path, error = %e, "Failed to read video response");
                self.failed = true;
            }
            _ => {}
        }
        item
    }
}

impl Drop for RelayStream {
    fn drop(&mut self) {
        metrics::record_video_bytes(self.bytes);
        if !self.failed {
            tracing::info!(path = %self.path, bytes = self.bytes, "Video relayed");
        }
    }
}
