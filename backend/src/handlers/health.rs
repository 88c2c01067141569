//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub price_rows: usize,
    pub seasonal_rows: usize,
    pub model: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_status = if state.ctx.model.is_some() {
        "loaded".to_string()
    } else {
        "absent".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        price_rows: state.ctx.store.price_count(),
        seasonal_rows: state.ctx.store.seasonal_count(),
        model: model_status,
    })
}
