//! Domain layer - core pipeline logic and entities

pub mod error;
pub mod location;
pub mod prediction;

pub use error::DomainError;
pub use location::LocationCatalog;
pub use prediction::{
    format_lakh, normalize, FeatureRecord, PredictionRequest, PredictionResult,
};
