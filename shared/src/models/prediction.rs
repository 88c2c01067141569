//! Prediction request/response models

use serde::{Deserialize, Serialize};

/// Price returned when no trained model artifact is loaded
pub const DEFAULT_PRICE: f64 = 25.0;

/// Price returned when inference against a loaded model fails
pub const INFERENCE_FALLBACK_PRICE: f64 = 30.25;

/// Advisory line attached to every prediction
pub const ADVISORY_TIP: &str = "Ensure proper irrigation and pest management.";

/// A crop suitability and price prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub city: String,
    pub season: String,
    pub crop: String,
    /// Calendar month (1-12); defaults to the current month when omitted
    #[serde(default)]
    pub month: Option<u32>,
}

/// Response for a prediction request
///
/// Always well-formed: inference failures are masked by fallback prices and
/// never surface as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub crop: String,
    pub city: String,
    pub season: String,
    pub suitable: bool,
    pub warning: Option<String>,
    pub predicted_price: f64,
    pub tip: String,
}

/// Round a price to two decimal places
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
