//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers under `/api/v1`
//! - Wire up middleware (request ID, tracing, CORS, metrics)
//! - Serve on a bound listener until shutdown is signalled

use axum::{body::Body, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::{handlers, video};
use crate::lifecycle::shutdown::wait_for;
use crate::upstream::{ClientBuildError, ExerciseApi};

pub const API_PREFIX: &str = "/api/v1";

/// Application state injected into handlers.
///
/// Immutable and shared by every request; no locking needed.
#[derive(Clone)]
pub struct AppState {
    pub api: ExerciseApi,
}

/// HTTP server for the exercise gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ClientBuildError> {
        let state = AppState {
            api: ExerciseApi::new(&config.upstream)?,
        };

        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let api = Router::new()
            .route("/exercises", get(handlers::get_exercise_listings))
            .route("/exercises/{id}", get(handlers::get_exercise_by_id))
            .route("/search", get(handlers::get_exercise_search))
            .route("/videos", get(video::video_path_missing))
            .route("/videos/", get(video::video_path_missing))
            .route("/videos/{*path}", get(video::proxy_video));

        tracing::info!(
            prefix = API_PREFIX,
            "Exercise routes registered: /exercises, /exercises/{{id}}, /search, /videos/{{*path}}"
        );

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(Any);

        Router::new()
            .route("/", get(handlers::root))
            .nest(API_PREFIX, api)
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(cors),
            )
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
