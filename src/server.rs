use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    signals::shutdown_signal,
};

/// Frame actions are tiny JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the frame server
///
/// This function:
/// 1. Initializes metrics (if enabled)
/// 2. Builds the shared HTTP client and application state
/// 3. Binds to the configured address
/// 4. Serves requests until SIGINT/SIGTERM
///
/// No upstream request is made here; the first one happens on the first
/// button press.
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        match metrics::init_metrics() {
            Ok(handle) => Some(Arc::new(handle)),
            Err(e) => {
                warn!("Metrics disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting Powerloom frame on {}", addr);
    info!(
        upstream = %config.upstream.base_url,
        public_url = %config.frame.public_url,
        "Frame configuration"
    );

    let state = AppState::new(config, reqwest::Client::new());
    let app = create_router(state, metrics_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, metrics_handle: Option<Arc<PrometheusHandle>>) -> Router {
    let metrics_endpoint = state.config.metrics.endpoint.clone();

    let frame_routes = Router::new()
        .route(
            "/api",
            get(handlers::frame::frame_view).post(handlers::frame::frame_action),
        )
        .route("/api/image", get(handlers::image::frame_image))
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(handlers::ops::health_check))
        .merge(frame_routes);

    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(&metrics_endpoint, get(handlers::ops::prometheus_metrics))
                .with_state(handle),
        );
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
