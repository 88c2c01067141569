//! Market reference data models
//!
//! Rows of the two CSV tables loaded at startup. Row order in the price
//! table is meaningful: it drives first-occurrence category encoding.

use serde::{Deserialize, Serialize};

/// One historical market price observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub city: String,
    pub crop: String,
    pub price: f64,
    /// Calendar month of the observation, when the source records one
    #[serde(default)]
    pub month: Option<u32>,
}

/// One "crop is conventionally grown in this season here" fact
///
/// Presence of a record is the suitability signal; there is no score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonalRecord {
    pub city: String,
    pub season: String,
    pub crop: String,
}

impl SeasonalRecord {
    /// Exact, case-sensitive match against a requested triple
    pub fn matches(&self, city: &str, season: &str, crop: &str) -> bool {
        self.city == city && self.season == season && self.crop == crop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonal_record_exact_match() {
        let record = SeasonalRecord {
            city: "Bengaluru".to_string(),
            season: "Monsoon".to_string(),
            crop: "Maize".to_string(),
        };
        assert!(record.matches("Bengaluru", "Monsoon", "Maize"));
    }

    #[test]
    fn test_seasonal_record_is_case_sensitive() {
        let record = SeasonalRecord {
            city: "Bengaluru".to_string(),
            season: "Monsoon".to_string(),
            crop: "Maize".to_string(),
        };
        assert!(!record.matches("bengaluru", "Monsoon", "Maize"));
        assert!(!record.matches("Bengaluru", "monsoon", "Maize"));
        assert!(!record.matches("Bengaluru", "Monsoon", "maize"));
    }
}
