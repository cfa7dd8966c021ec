//! Input normalization for raw prediction payloads
//!
//! Both JSON and form-encoded bodies are decoded into a `serde_json::Map`
//! before reaching this module, so the validation rules are identical for
//! structured and browser clients.

use serde_json::{Map, Value};

use super::entity::PredictionRequest;
use crate::domain::DomainError;

/// Canonical field order for required-field checks and error reporting.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "house_type",
    "location",
    "bhk",
    "bathrooms",
    "balcony",
    "area_sqft",
];

/// Placeholder glyphs that mean "no value": hyphen, en-dash, em-dash.
const MISSING_GLYPHS: [&str; 3] = ["-", "\u{2013}", "\u{2014}"];

/// Validate a raw payload into a typed [`PredictionRequest`].
///
/// The required-field pass runs first, in canonical order, so a request
/// missing several fields always reports the same one.
pub fn normalize(data: &Map<String, Value>) -> Result<PredictionRequest, DomainError> {
    for field in REQUIRED_FIELDS {
        let present = match data.get(field) {
            None | Some(Value::Null) => false,
            Some(value) => !raw_text(value).trim().is_empty(),
        };
        if !present {
            return Err(DomainError::missing_field(field));
        }
    }

    Ok(PredictionRequest {
        house_type: raw_text(&data["house_type"]).trim().to_string(),
        location: raw_text(&data["location"]).trim().to_string(),
        bhk: parse_positive_number("bhk", &data["bhk"])?,
        bathrooms: parse_positive_number("bathrooms", &data["bathrooms"])?,
        balcony: parse_positive_number("balcony", &data["balcony"])?,
        area_sqft: parse_positive_number("area_sqft", &data["area_sqft"])?,
    })
}

/// String form of a raw payload value. JSON numbers and booleans go through
/// their display form; the numeric parser decides what survives.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse one numeric field: trim, reject dash placeholders, strip
/// thousands-separator commas, parse as f64, require strictly positive.
fn parse_positive_number(field: &str, value: &Value) -> Result<f64, DomainError> {
    let raw = raw_text(value);
    let trimmed = raw.trim();

    if MISSING_GLYPHS.contains(&trimmed) {
        return Err(DomainError::not_a_number(field, trimmed));
    }

    let cleaned = trimmed.replace(',', "");
    let number: f64 = cleaned
        .parse()
        .map_err(|_| DomainError::not_a_number(field, trimmed))?;

    // `!(n > 0)` also rejects NaN, which would slip through `n <= 0`.
    if !(number > 0.0) {
        return Err(DomainError::non_positive(field));
    }

    Ok(number)
}
