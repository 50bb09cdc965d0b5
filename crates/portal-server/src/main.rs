use std::process::ExitCode;

use anyhow::Context;
use portal_config::PortalConfig;
use portal_kv::PortalStore;
use portal_server::AppState;
use portal_servicem8::ServiceM8Client;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("portal-server error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PORTAL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

async fn run() -> anyhow::Result<()> {
    let config = PortalConfig::load_with_dotenv().context("failed to load configuration")?;

    let kv = portal_kv::connect(&config.kv)
        .await
        .context("failed to connect to the key-value store")?;

    let mut state =
        AppState::new(PortalStore::new(kv)).with_debug_routes(config.server.debug_routes);
    if config.servicem8.is_configured() {
        state = state.with_servicem8(ServiceM8Client::from_config(&config.servicem8)?);
    } else {
        tracing::warn!("ServiceM8 credentials not set; job routes will fail");
    }

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "portal server listening");

    portal_server::serve(listener, portal_server::app(state, &config.server)).await?;
    tracing::info!("server stopped");
    Ok(())
}
