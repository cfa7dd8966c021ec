//! Prediction request entities and the feature assembler

use serde::Serialize;

/// A validated prediction request. Numeric fields are guaranteed strictly
/// positive by the normalizer; string fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub house_type: String,
    pub location: String,
    pub bhk: f64,
    pub bathrooms: f64,
    pub balcony: f64,
    pub area_sqft: f64,
}

impl PredictionRequest {
    /// Assemble the feature record the predictor consumes.
    ///
    /// Field set and order are fixed; the model artifact relies on them.
    pub fn to_features(&self) -> FeatureRecord {
        FeatureRecord {
            house_type: self.house_type.clone(),
            location: self.location.clone(),
            bhk: self.bhk,
            bathrooms: self.bathrooms,
            balcony: self.balcony,
            area_sqft: self.area_sqft,
        }
    }
}

/// The exact record shape a trained model expects per prediction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub house_type: String,
    pub location: String,
    pub bhk: f64,
    pub bathrooms: f64,
    pub balcony: f64,
    pub area_sqft: f64,
}

/// Outcome of a prediction: raw rupee amount plus its display form.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub rupees: f64,
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            house_type: "Apartment".to_string(),
            location: "Alkapuri".to_string(),
            bhk: 2.0,
            bathrooms: 2.0,
            balcony: 1.0,
            area_sqft: 1000.0,
        }
    }

    #[test]
    fn test_feature_record_field_order() {
        let features = sample_request().to_features();
        let json = serde_json::to_string(&features).unwrap();

        let expected_order = [
            "house_type",
            "location",
            "bhk",
            "bathrooms",
            "balcony",
            "area_sqft",
        ];
        let positions: Vec<usize> = expected_order
            .iter()
            .map(|key| json.find(&format!("\"{}\"", key)).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "field order must be preserved: {}", json);
    }

    #[test]
    fn test_feature_record_values_match_request() {
        let request = sample_request();
        let features = request.to_features();

        assert_eq!(features.house_type, request.house_type);
        assert_eq!(features.location, request.location);
        assert_eq!(features.bhk, request.bhk);
        assert_eq!(features.bathrooms, request.bathrooms);
        assert_eq!(features.balcony, request.balcony);
        assert_eq!(features.area_sqft, request.area_sqft);
    }
}
