//! Condensation backend process
//!
//! Serves the `/v1/condense` boundary consumed by governors running
//! inside voice pipelines. Bootstrapping of the voice pipeline itself
//! lives elsewhere; this process only hosts the backend.

use anyhow::Context;
use speech_governor::api::{build_router, CondenseState};
use speech_governor::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::var("SPEECH_GOVERNOR_CONFIG").ok();
    let config =
        Config::load(config_path.as_deref()).context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if config.logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = CondenseState::new(&config).context("failed to build condenser state")?;
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Condensation backend listening on {}", addr);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
