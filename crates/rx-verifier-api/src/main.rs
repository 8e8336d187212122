//! Prescription verifier HTTP server.
//!
//! Settings come from the environment (a `.env` file is read if present):
//!
//! - `RX_VERIFIER_ADDR`: listen address (default `0.0.0.0:8000`)
//! - `RX_VERIFIER_KNOWLEDGE_BASE`: JSON tables replacing the builtin ones
//! - `HUGGINGFACE_API_KEY`: enables remote entity recognition
//! - `RX_VERIFIER_NER_URL`, `RX_VERIFIER_NER_TIMEOUT_SECS`: NER endpoint and timeout
//! - `RX_VERIFIER_FALLBACK_ORDER`: `knowledge-base` or `text`

use rx_verifier_api::{build_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rx_verifier_api=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "Loaded environment file");
    }

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    tracing::info!("-- Starting Rx Verifier API on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
