//! # rfidgated: rfidgate daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Connect to MongoDB and verify it answers a ping; exit otherwise
//! - Construct the repository, the record service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the store
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use rfidgate_adapter_http_axum::state::AppState;
use rfidgate_adapter_storage_mongodb::MongoDeviceRecordRepository;
use rfidgate_app::services::record_service::DeviceRecordService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Store
    let store = match config.store_config().connect().await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, url = %config.store.url, "could not reach MongoDB");
            return Err(err.into());
        }
    };

    // Services
    let repo = MongoDeviceRecordRepository::new(store.collection());
    let record_service = DeviceRecordService::new(repo).with_timeouts(config.query_timeouts());
    let deadlines = record_service.timeouts();
    tracing::info!(
        latest = ?deadlines.latest,
        all = ?deadlines.all,
        by_rfid = ?deadlines.by_rfid,
        "store query deadlines"
    );

    // HTTP
    let app = rfidgate_adapter_http_axum::router::build(AppState::new(record_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "rfidgated listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    served?;

    tracing::info!("rfidgated stopped");
    Ok(())
}

/// Resolves on the first SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
