//! HTTP request handlers for the `/api` surface.

use crate::server::AppState;
use airwatch_core::AirwatchError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

/// Renders a classified failure as `{"detail": ...}` with its mapped status.
pub struct ApiError(AirwatchError);

impl From<AirwatchError> for ApiError {
    fn from(err: AirwatchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.to_http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Welcome payload for the API root.
pub async fn handle_welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Air Quality Index API!" }))
}

/// Health check with the current cache size.
pub async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "cache_size": state.service.cache_size(),
    }))
}

/// Request counters and the derived cache hit rate.
pub async fn handle_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.stats().snapshot())
}

/// AQI by city name.
pub async fn handle_by_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.service.by_city(&city).await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            error!("air-quality lookup for '{}' failed: {}", city, e);
            Err(e.into())
        }
    }
}

/// AQI by geographic coordinates.
pub async fn handle_by_coords(
    State(state): State<Arc<AppState>>,
    Path((lat, lon)): Path<(f64, f64)>,
) -> Result<Json<Value>, ApiError> {
    match state.service.by_coords(lat, lon).await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            error!("air-quality lookup for geo:{};{} failed: {}", lat, lon, e);
            Err(e.into())
        }
    }
}
