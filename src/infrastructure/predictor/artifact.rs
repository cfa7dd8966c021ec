//! Serialized regression model artifact
//!
//! The artifact is a JSON linear model: an intercept, one weight per numeric
//! feature, and per-category weights for the two categorical features. It is
//! deserialized once at startup and evaluated read-only afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{DomainError, FeatureRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub intercept: f64,
    pub weights: NumericWeights,
    #[serde(default)]
    pub house_type: HashMap<String, f64>,
    #[serde(default)]
    pub location: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumericWeights {
    pub bhk: f64,
    pub bathrooms: f64,
    pub balcony: f64,
    pub area_sqft: f64,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| DomainError::model_load(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| DomainError::model_load(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Evaluate the model against one feature record.
    ///
    /// Categories the model was not trained on are a prediction failure, not
    /// a silent zero contribution.
    pub fn predict(&self, features: &FeatureRecord) -> Result<f64, DomainError> {
        let house_type = self.category_weight("house_type", &self.house_type, &features.house_type)?;
        let location = self.category_weight("location", &self.location, &features.location)?;

        Ok(self.intercept
            + house_type
            + location
            + self.weights.bhk * features.bhk
            + self.weights.bathrooms * features.bathrooms
            + self.weights.balcony * features.balcony
            + self.weights.area_sqft * features.area_sqft)
    }

    fn category_weight(
        &self,
        field: &str,
        weights: &HashMap<String, f64>,
        value: &str,
    ) -> Result<f64, DomainError> {
        if weights.is_empty() {
            // Artifacts trained without this categorical feature.
            return Ok(0.0);
        }
        weights.get(value).copied().ok_or_else(|| {
            DomainError::prediction_failed(format!("unknown {} '{}'", field, value))
        })
    }
}
