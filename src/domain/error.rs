use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Not a number: {raw}")]
    NotANumber { field: String, raw: String },

    #[error("Value must be positive and greater than zero")]
    NonPositiveValue { field: String },

    #[error("Prediction failed: {message}")]
    PredictionFailed { message: String },

    #[error("Invalid request body: {message}")]
    MalformedBody { message: String },

    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("Model load error: {message}")]
    ModelLoad { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn not_a_number(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::NotANumber {
            field: field.into(),
            raw: raw.into(),
        }
    }

    pub fn non_positive(field: impl Into<String>) -> Self {
        Self::NonPositiveValue {
            field: field.into(),
        }
    }

    pub fn prediction_failed(message: impl Into<String>) -> Self {
        Self::PredictionFailed {
            message: message.into(),
        }
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    pub fn model_load(message: impl Into<String>) -> Self {
        Self::ModelLoad {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = DomainError::missing_field("location");
        assert_eq!(error.to_string(), "Missing field: location");
    }

    #[test]
    fn test_not_a_number_keeps_raw_text() {
        let error = DomainError::not_a_number("bhk", "two");
        assert_eq!(error.to_string(), "Not a number: two");
    }

    #[test]
    fn test_non_positive_message() {
        let error = DomainError::non_positive("area_sqft");
        assert_eq!(
            error.to_string(),
            "Value must be positive and greater than zero"
        );
    }

    #[test]
    fn test_prediction_failed_message() {
        let error = DomainError::prediction_failed("unknown location 'Gotri'");
        assert_eq!(
            error.to_string(),
            "Prediction failed: unknown location 'Gotri'"
        );
    }
}
