mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{health, not_found, webhook};
pub use models::{
    EmptyResponse, ErrorResponse, HealthResponse, SpeechResponse, WebhookRequest, WebhookResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
