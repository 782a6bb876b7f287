use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::{balance_handler, health_handler, retrieve_handler, store_handler};
use crate::api::state::AppState;
use crate::chain::EthersChainClient;
use crate::config::Config;
use crate::db::{create_pool, PgRecordStore};
use crate::pinning::PinataClient;

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn,hyper=warn,tower=warn";

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Build the router over an already-constructed state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/store", post(store_handler))
        .route("/retrieve/{ipfs_hash}", get(retrieve_handler))
        .route(
            "/balance/{token_address}/{wallet_address}",
            get(balance_handler),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect every external collaborator described by `config`
pub async fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let records = PgRecordStore::new(create_pool(&config.database_url)?);
    if let Err(e) = records.prepare().await {
        // Store operations retry the schema setup on their next use
        error!(error = %e, "Record store unavailable at startup, continuing without it");
    }

    let chain = EthersChainClient::new(&config.web3_provider_url)?;
    let pinning = PinataClient::from_config(config);

    Ok(AppState::new(
        Arc::new(pinning),
        Arc::new(records),
        Arc::new(chain),
    ))
}

pub async fn create_app(config: &Config) -> Result<Router, Box<dyn std::error::Error>> {
    let state = build_state(config).await?;
    Ok(create_router(state))
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting textpin API server");

    let config = Config::from_env()?;
    info!(config = ?config, "Configuration loaded");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {}", e);
            return;
        }
        info!("Shutting down gracefully...");
    };

    let app = create_app(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
