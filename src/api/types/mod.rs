//! Wire types for the HTTP API

mod error;

pub use error::{ApiError, ErrorResponse};

use serde::{Deserialize, Serialize};

/// Success payload for a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub pred_rupees: f64,
    pub pred_formatted: String,
}

/// Contact form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_response_wire_shape() {
        let json = serde_json::to_string(&PredictResponse {
            pred_rupees: 2_920_000.0,
            pred_formatted: "\u{20b9} 29.2 Lakh".to_string(),
        })
        .unwrap();
        assert!(json.contains("\"pred_rupees\":2920000.0"));
        assert!(json.contains("\"pred_formatted\""));
    }
}
