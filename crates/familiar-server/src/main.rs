//! Nexus Server - cooldown store and ability-cast service
//!
//! Serves the cooldown records familiars consult before acting, plus the
//! RPC-style ability endpoints.

use anyhow::Result;
use familiar_core::{config, logging};
use familiar_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path =
        std::env::var("FAMILIAR_CONFIG").unwrap_or_else(|_| "familiar.toml".to_string());
    let config = config::load_config_or_default(&config_path);

    logging::init_logging(&config.logging);

    let state = AppState::new()?;
    let router = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("🧿 Nexus server listening on http://{}", addr);
    tracing::info!("📚 Endpoints:");
    tracing::info!("  GET  /               - Service banner");
    tracing::info!("  GET  /health         - Liveness check");
    tracing::info!("  GET  /cooldown/{{familiar}} - Last activation timestamp");
    tracing::info!("  POST /cooldown/{{familiar}} - Record activation timestamp");
    tracing::info!("  GET  /abilities      - List castable abilities");
    tracing::info!("  POST /abilities/{{name}}    - Cast an ability");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
