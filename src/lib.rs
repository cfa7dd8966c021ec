//! Homeworth API
//!
//! A house price estimation web service:
//! - Location dropdown populated from a CSV dataset loaded at startup
//! - Predictions from a serialized linear model artifact, with a
//!   fixed-weight heuristic fallback when no artifact is available
//! - JSON and server-rendered responses from the same pipeline

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::path::Path;

use api::state::AppState;
use infrastructure::{dataset, ContactLog, Predictor};

/// Create the application state: load the location catalog and the model
/// artifact once, then share them read-only for the process lifetime. Missing
/// or unreadable startup inputs degrade functionality instead of failing.
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let catalog = dataset::load_or_empty(Path::new(&config.data.dataset_path));
    let predictor = Predictor::from_artifact_path(Path::new(&config.data.model_path));
    let contact_log = ContactLog::new(&config.data.contact_log_path);

    AppState::new(catalog, predictor, contact_log)
}
