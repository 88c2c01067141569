//! Validation utilities for the GrowGuide crop advisory service

/// Validate a calendar month is in 1..=12
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("Month must be between 1 and 12")
    }
}
