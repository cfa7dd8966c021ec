use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::pages;
use super::predict;
use super::state::AppState;

/// Create the application router with shared state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/charts", get(pages::charts))
        .route(
            "/contact",
            get(pages::contact_page).post(pages::submit_contact),
        )
        .route(
            "/predict",
            get(predict::predict_form).post(predict::submit_prediction),
        )
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
