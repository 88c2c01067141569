//! Shared types and models for the GrowGuide crop advisory service
//!
//! This crate contains the domain types, the category encoder, and the
//! linear price model shared between the backend server and the offline
//! trainer.

pub mod encoder;
pub mod model;
pub mod models;
pub mod validation;

pub use encoder::*;
pub use model::*;
pub use models::*;
pub use validation::*;
