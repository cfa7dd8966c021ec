//! Application state for shared startup artifacts

use std::sync::Arc;

use crate::domain::LocationCatalog;
use crate::infrastructure::{ContactLog, Predictor};

/// Shared read-only state, constructed once at startup and cloned into every
/// handler. No writer exists after initialization, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<LocationCatalog>,
    pub predictor: Arc<Predictor>,
    pub contact_log: Arc<ContactLog>,
}

impl AppState {
    pub fn new(catalog: LocationCatalog, predictor: Predictor, contact_log: ContactLog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            predictor: Arc::new(predictor),
            contact_log: Arc::new(contact_log),
        }
    }
}
