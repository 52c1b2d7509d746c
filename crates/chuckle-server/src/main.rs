mod configuration;
mod error;
mod routes;
mod state;

use anyhow::Context;
use chuckle::{action::JokeAction, providers::factory};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins, otherwise info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = configuration::Settings::new()?;
    let provider_config = settings.provider.into_config();
    info!(provider = %provider_config.provider_type(), "using joke provider");

    let provider =
        factory::get_provider(provider_config).context("Failed to create joke provider")?;
    let state = state::AppState::new(JokeAction::new(provider));
    let app = routes::configure(state);

    let addr = settings
        .server
        .socket_addr()
        .context("Failed to parse server address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
