//! Prediction pipeline domain types: request entities, input normalization,
//! and currency display formatting.

pub mod entity;
pub mod format;
pub mod normalizer;

pub use entity::{FeatureRecord, PredictionRequest, PredictionResult};
pub use format::format_lakh;
pub use normalizer::{normalize, REQUIRED_FIELDS};
