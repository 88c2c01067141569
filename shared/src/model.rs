//! Fitted linear price model
//!
//! The trainer fits `price ≈ w0·month + w1·crop_id + w2·city_id + b` and
//! serializes the weights to a JSON artifact. The server loads the artifact
//! read-only at startup and treats the weights as opaque constants.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of features the serving path supplies: month, crop id, city id
pub const FEATURE_COUNT: usize = 3;

/// Errors from model artifact I/O and inference
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("feature vector has {got} entries, model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("model produced a non-finite price")]
    NonFinite,
}

/// A fitted linear regression over (month, crop_id, city_id)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl PriceModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Predict a price for one feature vector
    ///
    /// Pure over the inputs. A vector whose length does not match the fitted
    /// coefficients (a corrupted or stale artifact) and a non-finite result
    /// are both inference errors; callers decide the fallback.
    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let price = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(weight, feature)| weight * feature)
            .sum::<f64>()
            + self.intercept;

        if !price.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(price)
    }

    /// Serialize the model to a JSON artifact
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let artifact = serde_json::to_string_pretty(self)?;
        std::fs::write(path, artifact)?;
        Ok(())
    }

    /// Load a model from a JSON artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let artifact = std::fs::read_to_string(path)?;
        let model = serde_json::from_str(&artifact)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PriceModel {
        PriceModel::new(vec![0.5, 2.0, -1.0], 10.0)
    }

    #[test]
    fn test_predict_is_linear_in_features() {
        // 0.5*6 + 2.0*1 - 1.0*2 + 10.0 = 13.0
        let price = model().predict(&[6.0, 1.0, 2.0]).unwrap();
        assert!((price - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_rejects_wrong_shape() {
        let err = model().predict(&[6.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_predict_rejects_non_finite_output() {
        let degenerate = PriceModel::new(vec![f64::NAN, 0.0, 0.0], 0.0);
        let err = degenerate.predict(&[6.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ModelError::NonFinite));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("growguide-model-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("crop_model.json");

        let original = model();
        original.save(&path).unwrap();
        let loaded = PriceModel::load(&path).unwrap();
        assert_eq!(loaded, original);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_artifact_is_io_error() {
        let err = PriceModel::load("/nonexistent/crop_model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
