//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by endpoint and status
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency by endpoint
//! - `gateway_video_bytes_total` (counter): bytes relayed by the video proxy
//!
//! Without an installed recorder every call is a no-op, which is the
//! default and what the tests run with.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with an HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled client request.
pub fn record_request(endpoint: String, status: u16) {
    ::metrics::counter!(
        "gateway_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record how long an upstream call took, measured from `start`.
pub fn record_upstream(endpoint: &'static str, start: Instant) {
    ::metrics::histogram!("gateway_upstream_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record bytes relayed to a client by the video proxy.
pub fn record_video_bytes(bytes: u64) {
    ::metrics::counter!("gateway_video_bytes_total").increment(bytes);
}
