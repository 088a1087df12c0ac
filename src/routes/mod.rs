pub mod ui;

pub use ui::*;

use crate::AppState;
use crate::envelope::ApiResponse;
use crate::error::AppError;
use crate::slides::SlideData;
use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub timestamp: String,
    /// Seconds since the process started
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct HelloData {
    pub timestamp: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    Json(
        ApiResponse::with_data(HealthData {
            timestamp: timestamp(),
            uptime: state.started_at.elapsed().as_secs_f64(),
        })
        .and_message("Server is healthy"),
    )
}

pub async fn api_root() -> Json<ApiResponse> {
    Json(ApiResponse::message("Welcome to the API"))
}

pub async fn hello() -> Json<ApiResponse<HelloData>> {
    Json(
        ApiResponse::with_data(HelloData {
            timestamp: timestamp(),
        })
        .and_message("Hello from the wrapped API route!"),
    )
}

pub async fn list_slides(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<SlideData>>> {
    Json(ApiResponse::with_data(state.slides.to_vec()))
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
