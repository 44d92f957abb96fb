//! # Inventory Service
//!
//! Entry point: loads the product collection, serves the REST API until SIGINT/SIGTERM,
//! then flushes the collection back to disk.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:3000 --data-file data/product.json
//! ```

use clap::Parser;
use inventory::config::Config;
use inventory::http;
use inventory::lifecycle::{setup_tracing, InventorySystem};
use inventory::store::JsonFileStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    info!(
        bind = %config.bind,
        data_file = %config.data_file.display(),
        "Starting inventory service"
    );

    let system = InventorySystem::initialize(
        JsonFileStore::new(&config.data_file),
        config.channel_capacity,
    )
    .await?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    // The router (and its client clones) is dropped once in-flight requests drain.
    axum::serve(listener, http::router(system.service()))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    let saved = system.shutdown().await?;
    info!(saved, "Inventory service stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
