//! Business logic services for the GrowGuide service

pub mod prediction;
pub mod store;

pub use prediction::PredictionService;
pub use store::TabularStore;
