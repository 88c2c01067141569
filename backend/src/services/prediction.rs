//! Crop suitability and price prediction service
//!
//! Stateless orchestration over the immutable application context:
//! suitability lookup, feature encoding, and model inference with explicit
//! fallback branches.

use chrono::{Datelike, Utc};

use shared::{
    round_price, PredictionRequest, PredictionResponse, ADVISORY_TIP, DEFAULT_PRICE,
    INFERENCE_FALLBACK_PRICE,
};

use crate::AppContext;

/// Prediction service answering one request at a time
pub struct PredictionService<'a> {
    ctx: &'a AppContext,
}

impl<'a> PredictionService<'a> {
    /// Create a new PredictionService instance
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    /// Answer one prediction request
    ///
    /// Never fails: an absent model yields the default price and a failing
    /// inference yields the fixed fallback.
    pub fn predict(&self, request: &PredictionRequest) -> PredictionResponse {
        let month = request.month.unwrap_or_else(current_month);

        let suitable = self
            .ctx
            .store
            .is_suitable(&request.city, &request.season, &request.crop);

        let warning = if suitable {
            None
        } else {
            Some(format!(
                "{} is NOT suitable for {} in {}",
                request.crop, request.season, request.city
            ))
        };

        let predicted_price = match &self.ctx.model {
            None => DEFAULT_PRICE,
            Some(model) => {
                let features = [
                    f64::from(month),
                    self.ctx.encoders.crop.feature(&request.crop),
                    self.ctx.encoders.city.feature(&request.city),
                ];
                match model.predict(&features) {
                    Ok(price) => round_price(price),
                    Err(err) => {
                        tracing::warn!(
                            "price inference failed for {}/{} ({err}); using fallback",
                            request.crop,
                            request.city
                        );
                        INFERENCE_FALLBACK_PRICE
                    }
                }
            }
        };

        PredictionResponse {
            crop: request.crop.clone(),
            city: request.city.clone(),
            season: request.season.clone(),
            suitable,
            warning,
            predicted_price,
            tip: ADVISORY_TIP.to_string(),
        }
    }
}

/// Current calendar month (1-12) at request time
fn current_month() -> u32 {
    Utc::now().month()
}
