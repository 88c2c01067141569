//! HTTP handler for crop suitability and price prediction

use axum::{extract::State, Json};

use shared::{validate_month, PredictionRequest, PredictionResponse};

use crate::error::{AppError, AppResult};
use crate::services::prediction::PredictionService;
use crate::AppState;

/// Predict seasonal suitability and market price for a crop
///
/// Always succeeds for a valid request; model problems are masked by
/// fallback prices, never surfaced as errors.
pub async fn predict_crop(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    if let Some(month) = request.month {
        validate_month(month).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    }

    let service = PredictionService::new(&state.ctx);
    Ok(Json(service.predict(&request)))
}
