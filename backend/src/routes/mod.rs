//! Route definitions for the GrowGuide service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Crop suitability and price prediction (public)
        .route("/predict", post(handlers::predict_crop))
}
