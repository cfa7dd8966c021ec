//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    pub message: String,
}

/// Simple liveness check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check reporting the state of the startup artifacts. The service
/// stays ready in degraded mode: an empty catalog or a missing model only
/// reduces functionality.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let catalog_check = if state.catalog.is_empty() {
        HealthCheck {
            name: "location_catalog".to_string(),
            status: HealthStatus::Degraded,
            message: "no locations loaded".to_string(),
        }
    } else {
        HealthCheck {
            name: "location_catalog".to_string(),
            status: HealthStatus::Healthy,
            message: format!("{} locations", state.catalog.len()),
        }
    };

    let model_check = if state.predictor.has_model() {
        HealthCheck {
            name: "predictor_model".to_string(),
            status: HealthStatus::Healthy,
            message: "model artifact loaded".to_string(),
        }
    } else {
        HealthCheck {
            name: "predictor_model".to_string(),
            status: HealthStatus::Degraded,
            message: "heuristic fallback active".to_string(),
        }
    };

    let checks = vec![catalog_check, model_check];
    let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    (StatusCode::OK, Json(response))
}
