mod now_playing;
mod quote;
mod time;
mod weather;

pub use quote::NOTHING_TO_SAY;

use crate::api::WebhookRequest;
use crate::router::Intent;
use crate::upstream::UpstreamError;
use crate::AppState;

pub const CONFUSED: &str = "Doodad API got confused";

/// What a responder wants said back. `Empty` becomes a bare `{}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Speech(String),
    Empty,
}

impl Reply {
    pub fn speech(text: impl Into<String>) -> Self {
        Self::Speech(text.into())
    }
}

pub async fn respond(
    intent: Intent,
    request: &WebhookRequest,
    state: &AppState,
) -> Result<Reply, UpstreamError> {
    match intent {
        Intent::NowPlaying => {
            now_playing::respond(&state.upstream, &state.config.kusc_feed_url).await
        }
        Intent::Time => Ok(time::respond(
            request.parameter("time"),
            (state.now)(),
            state.config.timezone,
        )),
        Intent::Weather => {
            weather::respond(
                &state.upstream,
                &state.config.weather_base_url,
                request.parameter("geo-city"),
            )
            .await
        }
        Intent::Quote => {
            quote::respond(&state.upstream, state.config.quotes_url.as_deref()).await
        }
        Intent::Unknown => Ok(Reply::speech(CONFUSED)),
    }
}
