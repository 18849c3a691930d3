use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info, warn};

use crate::responders::{self, Reply};
use crate::router::route;
use crate::AppState;

use super::models::{ErrorResponse, HealthResponse, WebhookRequest, WebhookResponse};

/// Fulfills one intent. Always answers 200: a body that does not decode is
/// treated as an empty request, and responder failures are spoken back.
pub async fn webhook(State(state): State<AppState>, body: Bytes) -> Json<WebhookResponse> {
    debug!(body = %String::from_utf8_lossy(&body), "webhook request");

    let request: WebhookRequest = serde_json::from_slice(&body).unwrap_or_else(|err| {
        debug!(error = %err, "webhook body did not decode, treating it as empty");
        WebhookRequest::default()
    });

    let intent = route(request.intent_name());
    info!(
        intent_name = request.intent_name().unwrap_or_default(),
        action = request.action().unwrap_or_default(),
        ?intent,
        "dispatching intent"
    );

    let reply = match responders::respond(intent, &request, &state).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, ?intent, "responder failed");
            Reply::Speech(err.to_string())
        }
    };

    let response = WebhookResponse::from_reply(reply, &state.config.source);
    debug!(?response, "webhook response");
    Json(response)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
