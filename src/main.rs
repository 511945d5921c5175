use std::sync::Arc;

use anyhow::Context;
use buddy_chatbot::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,buddy_chatbot=debug,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(?config, "loaded configuration");

    let state = Arc::new(AppState::from_config(&config).context("failed to set up Gemini client")?);

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("Buddy Chatbot running at http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
