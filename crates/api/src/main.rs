use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use castline_api::config::ServerConfig;
use castline_api::router::build_app_router;
use castline_api::state::AppState;
use castline_core::catalog::fixtures;
use castline_events::{EventBus, EventJournal};
use castline_gateway::{Context, Gateway, LatencyProfile};
use castline_store::Store;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "castline_api=debug,castline_gateway=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        latency_scale = config.latency_scale,
        "Loaded server configuration"
    );

    // --- Store ---
    let store = match &config.store_path {
        Some(path) => {
            let store = Store::open_file(path.clone())
                .await
                .with_context(|| format!("Failed to open store at {}", path.display()))?;
            tracing::info!(path = %path.display(), "Using file-backed store");
            store
        }
        None => {
            tracing::info!("Using in-memory store");
            Store::in_memory()
        }
    };

    // --- Event bus + journal ---
    let event_bus = Arc::new(EventBus::default());
    let journal_cancel = CancellationToken::new();
    let journal_handle = tokio::spawn(EventJournal::run(
        store.clone(),
        event_bus.subscribe(),
        journal_cancel.clone(),
    ));

    // --- Gateway ---
    let latency = LatencyProfile::default().scaled(config.latency_scale)?;
    let catalog = Arc::new(fixtures::seed());
    let gateway = Arc::new(Gateway::new(Context::new(
        store,
        Arc::clone(&event_bus),
        catalog,
        latency,
    )));

    // --- App state + router ---
    let config = Arc::new(config);
    let state = AppState {
        config: Arc::clone(&config),
        gateway: Arc::clone(&gateway),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host: std::net::IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Drop pending dismiss timers and chat auto-replies first so nothing
    // publishes after the journal stops.
    gateway.teardown();

    journal_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), journal_handle).await;
    tracing::info!("Event journal stopped");

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler cannot
/// be installed, that signal is never awaited.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
