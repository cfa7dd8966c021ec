//! Prediction endpoint handlers
//!
//! `POST /predict` runs the pipeline: decode body, normalize, assemble
//! features, dispatch to the predictor. Structured clients (JSON body or
//! `X-Requested-With: XMLHttpRequest`) get JSON either way; browser clients
//! get the rendered form page carrying the result or the error message.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::pages;
use super::state::AppState;
use super::types::{ApiError, PredictResponse};
use crate::domain::{normalize, DomainError, PredictionResult};

/// GET /predict
pub async fn predict_form(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_predict_page(state.catalog.names(), None, None))
}

/// POST /predict
pub async fn submit_prediction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let structured = wants_structured(&headers);

    match run_pipeline(&state, &headers, &body) {
        Ok(result) => {
            info!(rupees = result.rupees, "Prediction served");
            if structured {
                Json(PredictResponse {
                    pred_rupees: result.rupees,
                    pred_formatted: result.formatted,
                })
                .into_response()
            } else {
                Html(pages::render_predict_page(
                    state.catalog.names(),
                    Some(&result.formatted),
                    None,
                ))
                .into_response()
            }
        }
        Err(err) => {
            debug!(error = %err, "Prediction request rejected");
            let api_error = ApiError::from(err);
            if structured {
                api_error.into_response()
            } else {
                (
                    api_error.status,
                    Html(pages::render_predict_page(
                        state.catalog.names(),
                        None,
                        Some(&api_error.message),
                    )),
                )
                    .into_response()
            }
        }
    }
}

/// Full pipeline: decode -> normalize -> assemble -> dispatch. Either every
/// stage succeeds and both raw and formatted values come back, or the first
/// failure terminates the request.
fn run_pipeline(
    state: &AppState,
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<PredictionResult, DomainError> {
    let payload = decode_payload(headers, body)?;
    let request = normalize(&payload)?;
    let features = request.to_features();
    state.predictor.predict(&features)
}

/// Decode a JSON or form-urlencoded body into the normalizer's map shape.
fn decode_payload(headers: &HeaderMap, body: &Bytes) -> Result<Map<String, Value>, DomainError> {
    if is_json(headers) {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(DomainError::malformed_body("expected a JSON object")),
            Err(e) => Err(DomainError::malformed_body(e.to_string())),
        }
    } else {
        Ok(url::form_urlencoded::parse(body)
            .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
            .collect())
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn wants_structured(headers: &HeaderMap) -> bool {
    if is_json(headers) {
        return true;
    }
    headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "XMLHttpRequest")
}
