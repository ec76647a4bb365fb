//! HTTP server implementation using Axum.

use crate::handlers::{
    handle_by_city, handle_by_coords, handle_health, handle_stats, handle_welcome,
};
use airwatch_core::AirQualityService;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers.
pub struct AppState {
    /// Cache-backed AQI fetcher
    pub service: AirQualityService,
}

/// Build the application router.
///
/// The static frontend is mounted as the fallback service, after every
/// `/api/*` route, so API paths always take precedence.
pub fn build_router(state: Arc<AppState>, frontend_dir: Option<PathBuf>) -> Router {
    // The frontend talks to the API from any origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/api", get(handle_welcome))
        .route("/api/health", get(handle_health))
        .route("/api/stats", get(handle_stats))
        .route("/api/air-quality/:city", get(handle_by_city))
        .route("/api/air-quality-coords/:lat/:lon", get(handle_by_coords))
        .with_state(state);

    match frontend_dir {
        Some(dir) if dir.is_dir() => {
            app = app.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            warn!(
                "Frontend directory {} not found, serving API only",
                dir.display()
            );
        }
        None => {}
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    service: AirQualityService,
    frontend_dir: Option<PathBuf>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState { service });
    let app = build_router(state, frontend_dir);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Ok(actual_addr)
}
