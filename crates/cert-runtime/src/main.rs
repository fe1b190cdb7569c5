//! # CertChain Runtime
//!
//! The main entry point for the certificate ledger service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + environment)
//! 3. Build the core container (ledger client, stores, services)
//! 4. Start the background projection-sync/reconciliation loop
//! 5. Signal ready; run until Ctrl+C
//!
//! ## Shutdown Sequence
//!
//! 1. Signal shutdown to the background loop
//! 2. Let the in-flight sync pass finish
//! 3. Exit

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use cert_runtime::{CertificateCore, CoreConfig, CoreContainer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  CertChain Runtime v0.1.0");
    info!("===========================================");

    // Load configuration
    let config = CoreConfig::from_env().context("Failed to load configuration")?;
    info!(
        confirmation_deadline_ms = config.confirmation_deadline.as_millis() as u64,
        sync_interval_ms = config.sync_interval.as_millis() as u64,
        durable_projection = config.data_dir.is_some(),
        "configuration loaded"
    );

    // Build all components
    let container = CoreContainer::build(&config).context("Failed to build core container")?;

    // Start the background maintenance loop
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let maintenance = tokio::spawn(maintenance_loop(
        container.core.clone(),
        config.sync_interval,
        shutdown_rx,
    ));

    info!("Core services initialized and running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    info!("Initiating graceful shutdown...");
    if let Err(e) = shutdown_tx.send(true) {
        warn!("Failed to send shutdown signal: {}", e);
    }
    let _ = tokio::time::timeout(Duration::from_secs(5), maintenance).await;
    info!("Shutdown complete");

    Ok(())
}

/// Keep the projection synced to the ledger head and the index free of
/// gaps left by partial registrations.
async fn maintenance_loop(
    core: std::sync::Arc<CertificateCore>,
    interval: Duration,
    mut shutdown_rx: tokio::sync::watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match core.sync_projection().await {
                    Ok(appended) if appended > 0 => {
                        info!(appended, "projection synced");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "projection sync failed"),
                }
                match core.reconcile().await {
                    Ok(report) if report.repaired > 0 || report.failed > 0 => {
                        info!(
                            repaired = report.repaired,
                            failed = report.failed,
                            "index reconciliation pass"
                        );
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "reconciliation failed"),
                }
            }
            _ = shutdown_rx.changed() => {
                info!("Maintenance loop stopped");
                break;
            }
        }
    }
}
