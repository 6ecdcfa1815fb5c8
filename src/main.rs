/// Main application entry point
mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod routes;
mod services;
mod store;
mod utils;

use crate::clients::ScheduleClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::{run_refresh_loop, EpgService};
use crate::store::SnapshotStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize snapshot store and upstream client
    let store = Arc::new(SnapshotStore::new(config.snapshot_path.clone()));
    let client = ScheduleClient::new(config.epg_api_url.clone(), config.page_limit)?;

    // Initialize service
    let epg_service = Arc::new(EpgService::new(client, store.clone(), config.window_days));

    // Initialize application state
    let state = AppState {
        epg_service: epg_service.clone(),
        store,
        refresh_on_download: config.refresh_on_download,
    };

    // Start background refresh loop with an explicit stop signal
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(run_refresh_loop(
        epg_service,
        Duration::from_secs(config.refresh_interval_seconds),
        shutdown_rx,
    ));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("epg-fetcher service listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    let _ = shutdown_tx.send(true);

    Ok(())
}
