//! Prediction infrastructure: the serialized model artifact and the
//! model-or-heuristic dispatcher.

pub mod artifact;
pub mod service;

pub use artifact::ModelArtifact;
pub use service::Predictor;
