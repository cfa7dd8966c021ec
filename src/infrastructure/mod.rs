//! Infrastructure layer - startup loading, prediction, and persistence

pub mod contact;
pub mod dataset;
pub mod logging;
pub mod predictor;

pub use contact::ContactLog;
pub use predictor::{ModelArtifact, Predictor};
