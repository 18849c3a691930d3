use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::responders::Reply;

/// Inbound fulfillment payload, kept as raw JSON. Each known path is read on
/// its own, so a mistyped field elsewhere never hides the intent.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct WebhookRequest {
    body: Value,
}

impl WebhookRequest {
    pub fn intent_name(&self) -> Option<&str> {
        self.body
            .pointer("/result/metadata/intentName")
            .and_then(Value::as_str)
    }

    pub fn action(&self) -> Option<&str> {
        self.body.pointer("/result/action").and_then(Value::as_str)
    }

    /// A string-valued entry of `result.parameters`.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.body
            .pointer("/result/parameters")?
            .get(key)
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    pub speech: String,
    pub display_text: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebhookResponse {
    Speech(SpeechResponse),
    Empty(EmptyResponse),
}

impl WebhookResponse {
    pub fn from_reply(reply: Reply, source: &str) -> Self {
        match reply {
            Reply::Speech(speech) => Self::Speech(SpeechResponse {
                display_text: speech.clone(),
                speech,
                source: source.to_string(),
            }),
            Reply::Empty => Self::Empty(EmptyResponse {}),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
