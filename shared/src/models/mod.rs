//! Domain models for the GrowGuide crop advisory service

mod market;
mod prediction;

pub use market::*;
pub use prediction::*;
