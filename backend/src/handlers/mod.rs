//! HTTP handlers for the GrowGuide service

pub mod health;
pub mod predict;

pub use health::health_check;
pub use predict::predict_crop;
