use intent_webhook::{app_state_from_env, build_app, run_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = app_state_from_env();
    let port = state.config.port;
    let app = build_app(state);

    run_server(app, port).await
}
