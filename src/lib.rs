//! Fulfillment webhook for a conversational-agent platform: routes an intent
//! name to a small responder and answers with a speech record.

mod api;
mod config;
mod responders;
mod router;
mod upstream;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use chrono::{DateTime, Utc};
use tokio::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use api::{
    EmptyResponse, ErrorResponse, HealthResponse, SpeechResponse, WebhookRequest, WebhookResponse,
};
pub use config::AppConfig;
pub use responders::{Reply, CONFUSED, NOTHING_TO_SAY};
pub use router::{route, Intent};
pub use upstream::{Upstream, UpstreamError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: Upstream,
    /// Wall clock for the time responder; swapped out in tests.
    pub now: fn() -> DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let upstream = Upstream::new(Duration::from_millis(config.timeout_ms));
        Self {
            config: Arc::new(config),
            upstream,
            now: Utc::now,
        }
    }
}

pub fn app_state_from_env() -> AppState {
    AppState::new(AppConfig::from_env())
}

pub fn build_app(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{port}"))?;

    info!(port, "listening for webhook calls");
    axum::serve(listener, app).await.context("server failed")
}
