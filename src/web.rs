use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::HorizonError;
use crate::api::{self, AppState};
use crate::config::{ApiConfig, HorizonConfig};

/// Headroom for assembling the response after upstream calls finish
const RESPONSE_MARGIN: Duration = Duration::from_secs(5);

/// Upstream calls run concurrently, so one retry budget bounds a request
fn request_timeout(api: &ApiConfig) -> Duration {
    api.retry_budget() + RESPONSE_MARGIN
}

/// Full application: health check, JSON API and the static client
pub fn app(config: &HorizonConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TimeoutLayer::new(request_timeout(&config.api)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &HorizonConfig, state: AppState) -> anyhow::Result<()> {
    let app = app(config, state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(HorizonError::from)
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
