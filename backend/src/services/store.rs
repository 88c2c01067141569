//! In-memory tabular store for market reference data
//!
//! Both CSV tables are read once at startup and never mutated afterwards,
//! so requests can share the store without coordination.

use std::path::Path;

use shared::{FeatureEncoders, PriceRecord, SeasonalRecord};

use crate::error::{AppError, AppResult};

/// Read-only crop price and seasonal suitability tables
#[derive(Debug, Clone, Default)]
pub struct TabularStore {
    prices: Vec<PriceRecord>,
    seasonal: Vec<SeasonalRecord>,
}

impl TabularStore {
    /// Load both tables from CSV sources
    ///
    /// A missing or malformed source is fatal; the server must not start
    /// with partial reference data.
    pub fn load(prices_path: impl AsRef<Path>, seasonal_path: impl AsRef<Path>) -> AppResult<Self> {
        let prices = read_table(prices_path.as_ref())?;
        let seasonal = read_table(seasonal_path.as_ref())?;

        if prices.is_empty() {
            return Err(AppError::DataSource(
                "price table contains no rows".to_string(),
            ));
        }

        Ok(Self { prices, seasonal })
    }

    /// Build a store from already-loaded records
    pub fn from_records(prices: Vec<PriceRecord>, seasonal: Vec<SeasonalRecord>) -> Self {
        Self { prices, seasonal }
    }

    /// Historical price rows in file order
    pub fn prices(&self) -> &[PriceRecord] {
        &self.prices
    }

    /// Seasonal suitability rows
    pub fn seasonal(&self) -> &[SeasonalRecord] {
        &self.seasonal
    }

    pub fn price_count(&self) -> usize {
        self.prices.len()
    }

    pub fn seasonal_count(&self) -> usize {
        self.seasonal.len()
    }

    /// True iff a seasonal record exactly matches the (city, season, crop)
    /// triple
    pub fn is_suitable(&self, city: &str, season: &str, crop: &str) -> bool {
        self.seasonal
            .iter()
            .any(|record| record.matches(city, season, crop))
    }

    /// Derive city and crop encoders from price-table order
    pub fn feature_encoders(&self) -> FeatureEncoders {
        FeatureEncoders::from_price_rows(
            self.prices
                .iter()
                .map(|row| (row.city.as_str(), row.crop.as_str()))
                .collect::<Vec<_>>(),
        )
    }
}

/// Read one CSV table into typed rows
fn read_table<T>(path: &Path) -> AppResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path).map_err(|err| {
        AppError::DataSource(format!("cannot open {}: {}", path.display(), err))
    })?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasonal(city: &str, season: &str, crop: &str) -> SeasonalRecord {
        SeasonalRecord {
            city: city.to_string(),
            season: season.to_string(),
            crop: crop.to_string(),
        }
    }

    fn price(city: &str, crop: &str, price: f64) -> PriceRecord {
        PriceRecord {
            city: city.to_string(),
            crop: crop.to_string(),
            price,
            month: None,
        }
    }

    #[test]
    fn test_is_suitable_requires_exact_triple() {
        let store = TabularStore::from_records(
            vec![price("Lagos", "Maize", 16.0)],
            vec![seasonal("Lagos", "Wet", "Maize")],
        );

        assert!(store.is_suitable("Lagos", "Wet", "Maize"));
        assert!(!store.is_suitable("Lagos", "Dry", "Maize"));
        assert!(!store.is_suitable("Abuja", "Wet", "Maize"));
        assert!(!store.is_suitable("Lagos", "Wet", "Rice"));
    }

    #[test]
    fn test_encoders_follow_price_table_order() {
        let store = TabularStore::from_records(
            vec![
                price("Bengaluru", "Tomato", 28.0),
                price("Mysuru", "Onion", 22.0),
                price("Bengaluru", "Maize", 16.0),
            ],
            Vec::new(),
        );

        let encoders = store.feature_encoders();
        assert_eq!(encoders.city.encode("Bengaluru"), Some(0));
        assert_eq!(encoders.city.encode("Mysuru"), Some(1));
        assert_eq!(encoders.crop.encode("Tomato"), Some(0));
        assert_eq!(encoders.crop.encode("Onion"), Some(1));
        assert_eq!(encoders.crop.encode("Maize"), Some(2));
    }

    #[test]
    fn test_load_missing_source_fails() {
        let result = TabularStore::load("/nonexistent/prices.csv", "/nonexistent/seasonal.csv");
        assert!(matches!(result, Err(AppError::DataSource(_))));
    }
}
