use anyhow::Context;
use formlabel_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();
    let state = AppState::new(&config).context("failed to build document loader")?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        "formlabel-server listening on {} (min host delay {:?})",
        config.bind_addr, config.loader.min_host_delay
    );

    axum::serve(listener, build_router(state, config.max_body_bytes))
        .await
        .context("server error")?;
    Ok(())
}
