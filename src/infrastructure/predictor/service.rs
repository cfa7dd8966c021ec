//! Predictor dispatch: trained model when available, linear heuristic otherwise

use std::path::Path;

use tracing::{info, warn};

use super::artifact::ModelArtifact;
use crate::domain::{format_lakh, DomainError, FeatureRecord, PredictionResult};

/// Raw model outputs below this are assumed to be log-scale (the model may
/// have been trained on a log-transformed target) and are expm1'd back to
/// rupees. The cutoff is heuristic; a genuinely small rupee prediction would
/// be mis-transformed.
const LOG_SCALE_THRESHOLD: f64 = 50.0;

/// Fallback heuristic weights, rupees per unit.
const RUPEES_PER_SQFT: f64 = 2_500.0;
const RUPEES_PER_BHK: f64 = 200_000.0;
const RUPEES_PER_BATHROOM: f64 = 50_000.0;
const RUPEES_PER_BALCONY: f64 = 20_000.0;

/// Shared read-only prediction service. Holds the optional model artifact
/// loaded at startup; never mutated afterwards.
#[derive(Debug)]
pub struct Predictor {
    model: Option<ModelArtifact>,
}

impl Predictor {
    pub fn new(model: Option<ModelArtifact>) -> Self {
        Self { model }
    }

    /// Heuristic-only predictor, used when no artifact is configured.
    pub fn heuristic_only() -> Self {
        Self { model: None }
    }

    /// Load the artifact with degraded-startup semantics: a missing or
    /// unreadable artifact leaves the heuristic path active.
    pub fn from_artifact_path(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "No model artifact, using heuristic fallback");
            return Self::heuristic_only();
        }

        match ModelArtifact::load(path) {
            Ok(model) => {
                info!(path = %path.display(), "Loaded model artifact");
                Self::new(Some(model))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load model, using heuristic fallback");
                Self::heuristic_only()
            }
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Produce a prediction for an assembled feature record.
    pub fn predict(&self, features: &FeatureRecord) -> Result<PredictionResult, DomainError> {
        let rupees = match &self.model {
            None => heuristic_estimate(features),
            Some(model) => {
                let raw = model.predict(features)?;
                recover_scale(raw)
            }
        };

        Ok(PredictionResult {
            rupees,
            formatted: format_lakh(rupees),
        })
    }
}

fn heuristic_estimate(features: &FeatureRecord) -> f64 {
    features.area_sqft * RUPEES_PER_SQFT
        + features.bhk * RUPEES_PER_BHK
        + features.bathrooms * RUPEES_PER_BATHROOM
        + features.balcony * RUPEES_PER_BALCONY
}

/// Undo a log-transformed target when the raw output looks log-scale.
/// A non-finite transform result keeps the untransformed value.
fn recover_scale(raw: f64) -> f64 {
    if raw < LOG_SCALE_THRESHOLD {
        let expanded = raw.exp_m1();
        if expanded.is_finite() {
            return expanded;
        }
    }
    raw
}
