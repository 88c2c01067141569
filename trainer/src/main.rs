//! GrowGuide - Offline Price Model Trainer
//!
//! One-shot script: reads the historical price table, fits an ordinary
//! least squares regression of price on (month, crop_id, city_id), and
//! writes the model artifact the server loads at startup. Run-to-completion,
//! no flags; any failure aborts the run.

use std::path::Path;

use anyhow::Context;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use shared::{FeatureEncoders, PriceModel, PriceRecord, FEATURE_COUNT};

/// Source price table
const PRICES_PATH: &str = "data/crop_prices.csv";

/// Destination model artifact
const MODEL_PATH: &str = "models/crop_model.json";

/// Placeholder month used for every training row; the source table carries
/// no usable month column, a known limitation of the demo model
const PLACEHOLDER_MONTH: f64 = 6.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growguide_train=info".into()),
        )
        .init();

    let records = load_prices(PRICES_PATH)?;
    tracing::info!("Loaded {} price rows from {}", records.len(), PRICES_PATH);

    let model = fit_price_model(&records)?;
    tracing::info!(
        "Fitted model: coefficients {:?}, intercept {:.4}",
        model.coefficients,
        model.intercept
    );

    if let Some(parent) = Path::new(MODEL_PATH).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    model
        .save(MODEL_PATH)
        .with_context(|| format!("cannot write {}", MODEL_PATH))?;

    println!("Model saved to {}", MODEL_PATH);
    Ok(())
}

/// Read the price table into typed rows
fn load_prices(path: &str) -> anyhow::Result<Vec<PriceRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("cannot open {}", path))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Fit the linear price model over the full table
///
/// City and crop ids come from first-occurrence encoding over the same
/// table the server loads, so serving-time features line up with the fit.
fn fit_price_model(records: &[PriceRecord]) -> anyhow::Result<PriceModel> {
    anyhow::ensure!(!records.is_empty(), "price table contains no rows");

    let encoders = FeatureEncoders::from_price_rows(
        records
            .iter()
            .map(|row| (row.city.as_str(), row.crop.as_str()))
            .collect::<Vec<_>>(),
    );

    let mut features = Array2::<f64>::zeros((records.len(), FEATURE_COUNT));
    let mut targets = Array1::<f64>::zeros(records.len());
    for (i, row) in records.iter().enumerate() {
        features[(i, 0)] = PLACEHOLDER_MONTH;
        features[(i, 1)] = encoders.crop.feature(&row.crop);
        features[(i, 2)] = encoders.city.feature(&row.city);
        targets[i] = row.price;
    }

    let dataset = Dataset::new(features, targets);
    let fitted = LinearRegression::new()
        .fit(&dataset)
        .context("least squares fit failed")?;

    Ok(PriceModel::new(
        fitted.params().to_vec(),
        fitted.intercept(),
    ))
}
