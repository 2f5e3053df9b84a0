// HTTP request handlers
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::river_service::{HistoryView, DEFAULT_HISTORY_DAYS};
use crate::domain::error::DataError;
use crate::domain::observation::CurrentReading;
use crate::presentation::app_state::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
    pub variables: Option<String>,
}

#[derive(Serialize)]
struct CurrentReadingResponse {
    timestamp: String,
    display_time: String,
    temperature: Option<f64>,
    air_temperature: Option<f64>,
}

#[derive(Serialize)]
struct PointResponse {
    timestamp: DateTime<Utc>,
    variable: &'static str,
    value: f64,
}

#[derive(Serialize)]
struct BoundsResponse {
    min: f64,
    max: f64,
}

#[derive(Serialize)]
struct HistoryResponse {
    points: Vec<PointResponse>,
    bounds: Option<BoundsResponse>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Latest water and air temperature for the summary tile
pub async fn current_reading(State(state): State<Arc<AppState>>) -> Response {
    match state.river_service.current_reading().await {
        Ok(Some(reading)) => Json(reading_response(reading)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "no current reading".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Unpivoted series points plus axis bounds for the charts
pub async fn history(
    Query(query): Query<HistoryQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    let variables: Vec<String> = query
        .variables
        .as_deref()
        .unwrap_or("temperature")
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    match state.river_service.history(days, &variables).await {
        Ok(view) => Json(history_response(view)).into_response(),
        Err(e) => error_response(e),
    }
}

fn reading_response(reading: CurrentReading) -> CurrentReadingResponse {
    CurrentReadingResponse {
        timestamp: reading.timestamp.to_rfc3339(),
        display_time: reading.timestamp.format("%d.%m.%Y %H:%M").to_string(),
        temperature: reading.temperature,
        air_temperature: reading.air_temperature,
    }
}

fn history_response(view: HistoryView) -> HistoryResponse {
    HistoryResponse {
        points: view
            .points
            .into_iter()
            .map(|p| PointResponse {
                timestamp: p.timestamp,
                variable: p.variable.name(),
                value: p.value,
            })
            .collect(),
        bounds: view.bounds.map(|b| BoundsResponse { min: b.min, max: b.max }),
    }
}

// Upstream failures surface as 502; nothing is masked with stale or
// fabricated data.
fn error_response(err: DataError) -> Response {
    let status = if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::BAD_REQUEST
    };
    tracing::error!(error = %err, "request failed");

    (status, Json(ErrorResponse { error: err.to_string() })).into_response()
}
