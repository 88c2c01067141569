//! Category encoding (factorization)
//!
//! Maps categorical string values to small integer ids in first-occurrence
//! order over the price table. City and crop ids are independent namespaces
//! and carry no meaning beyond identity.

use std::collections::HashMap;

/// Feature value substituted for a category the price table has never seen
pub const UNSEEN_CATEGORY: f64 = -1.0;

/// First-occurrence integer ids for one category
#[derive(Debug, Clone, Default)]
pub struct CategoryEncoder {
    ids: HashMap<String, usize>,
}

impl CategoryEncoder {
    /// Build an encoder from values in table order
    ///
    /// The first distinct value gets id 0, the second id 1, and so on.
    /// Repeated values keep their original id.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = HashMap::new();
        for value in values {
            let next_id = ids.len();
            ids.entry(value.as_ref().to_string()).or_insert(next_id);
        }
        Self { ids }
    }

    /// Look up the id assigned to a value, if it appeared in the table
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.ids.get(value).copied()
    }

    /// Encode a value as a model feature, with unseen values mapped to the
    /// sentinel
    pub fn feature(&self, value: &str) -> f64 {
        self.encode(value)
            .map_or(UNSEEN_CATEGORY, |id| id as f64)
    }

    /// Number of distinct values seen
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The two encoders derived from the price table
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoders {
    pub city: CategoryEncoder,
    pub crop: CategoryEncoder,
}

impl FeatureEncoders {
    /// Build both encoders from (city, crop) pairs in price-table order
    pub fn from_price_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)> + Clone,
    {
        Self {
            city: CategoryEncoder::from_values(rows.clone().into_iter().map(|(city, _)| city)),
            crop: CategoryEncoder::from_values(rows.into_iter().map(|(_, crop)| crop)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let encoder = CategoryEncoder::from_values(["Tomato", "Onion", "Tomato", "Maize"]);
        assert_eq!(encoder.encode("Tomato"), Some(0));
        assert_eq!(encoder.encode("Onion"), Some(1));
        assert_eq!(encoder.encode("Maize"), Some(2));
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn test_repeated_values_keep_first_id() {
        let encoder = CategoryEncoder::from_values(["a", "b", "a", "a", "c", "b"]);
        assert_eq!(encoder.encode("a"), Some(0));
        assert_eq!(encoder.encode("b"), Some(1));
        assert_eq!(encoder.encode("c"), Some(2));
    }

    #[test]
    fn test_unseen_value_has_no_id() {
        let encoder = CategoryEncoder::from_values(["Tomato"]);
        assert_eq!(encoder.encode("Potato"), None);
        assert_eq!(encoder.feature("Potato"), UNSEEN_CATEGORY);
    }

    #[test]
    fn test_feature_for_seen_value() {
        let encoder = CategoryEncoder::from_values(["Tomato", "Onion"]);
        assert_eq!(encoder.feature("Onion"), 1.0);
    }

    #[test]
    fn test_city_and_crop_namespaces_are_independent() {
        let rows = vec![
            ("Bengaluru", "Tomato"),
            ("Mysuru", "Tomato"),
            ("Bengaluru", "Onion"),
        ];
        let encoders = FeatureEncoders::from_price_rows(rows);
        assert_eq!(encoders.city.encode("Bengaluru"), Some(0));
        assert_eq!(encoders.city.encode("Mysuru"), Some(1));
        assert_eq!(encoders.crop.encode("Tomato"), Some(0));
        assert_eq!(encoders.crop.encode("Onion"), Some(1));
    }
}
