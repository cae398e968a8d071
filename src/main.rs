// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::actions::LoggingActionSink;
use crate::application::health_probe::HealthProbe;
use crate::application::loader::DashboardDataLoader;
use crate::application::poller::Poller;
use crate::infrastructure::api_client::VaultApiClient;
use crate::infrastructure::config::load_monitor_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    execute_pipeline, get_indicators, get_state, get_view, health_check, post_action, refresh,
    simulate, system_status, vault_settings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_monitor_config()?;
    let addr: SocketAddr = config.server.bind.parse()?;

    // Backend client (infrastructure layer)
    let client = Arc::new(VaultApiClient::new(config.backend.clone())?);

    // Loader, poller and probe (application layer)
    let loader = Arc::new(DashboardDataLoader::new(client.clone()));
    let health = Arc::new(HealthProbe::new(client.clone()));
    let mut poller = Poller::activate(loader.clone(), config.polling.interval());

    tokio::spawn({
        let health = health.clone();
        async move {
            let status = health.check().await;
            tracing::info!("Backend: {}", status.label());
        }
    });

    let state = Arc::new(AppState {
        loader,
        health,
        client,
        actions: Arc::new(LoggingActionSink),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/state", get(get_state))
        .route("/view/:tab", get(get_view))
        .route("/indicators", get(get_indicators))
        .route("/refresh", post(refresh))
        .route("/actions", post(post_action))
        .route("/vault-settings", get(vault_settings))
        .route("/system/status", get(system_status))
        .route("/simulate", post(simulate))
        .route("/pipeline/execute", post(execute_pipeline))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(
        backend = %config.backend.origin,
        "Starting vault-monitor on {}",
        addr
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    poller.deactivate();
    Ok(())
}
