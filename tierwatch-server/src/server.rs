//! tierwatch-server/src/server.rs
//!
//! Wiring: configuration, HTTP client, monitor task and Ctrl-C shutdown.

use anyhow::Context;
use tokio::sync::watch;
use tracing::{error, info, warn};

use tierwatch_common::ErrorKind;
use tierwatch_core::http::build_http_client;
use tierwatch_core::platforms::Endpoints;
use tierwatch_core::tasks::{spawn_monitor_task, PollOutcome, StreamerMonitor};
use tierwatch_core::MonitorConfig;

use crate::Args;

pub async fn run_server(args: Args) -> anyhow::Result<()> {
    // 1) Configuration; nothing touches the network before this succeeds.
    let config = MonitorConfig::from_env().context("Configuration error")?;
    info!("Configuration => {:?}", config.redacted());

    // 2) Shared HTTP client + monitor wiring
    let http = build_http_client(config.http_timeout)?;
    let monitor = StreamerMonitor::from_config(&config, http, &Endpoints::default());
    info!(
        "Notification channels => {}",
        monitor
            .channel_kinds()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if args.once {
        return run_once(monitor).await;
    }

    // 3) Ctrl-C flips the shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let _ctrlc_handle = tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {:?}", e);
            return;
        }
        info!("Ctrl-C detected; shutting down monitor...");
        let _ = shutdown_tx.send(true);
    });

    // 4) Monitor until shutdown
    let summary = spawn_monitor_task(monitor, shutdown_rx)
        .await
        .context("Monitor task panicked")?
        .context("Authentication failed")?;

    info!(
        "Server shutdown complete. polls={} notifications={} failures={}",
        summary.iterations, summary.notifications, summary.failures
    );
    Ok(())
}

async fn run_once(monitor: StreamerMonitor) -> anyhow::Result<()> {
    let running = monitor.start().await.context("Authentication failed")?;

    match running.poll_once().await {
        Ok(PollOutcome::Notified { kind, delivered }) => {
            info!("Single poll => {} announced on {} channel(s)", kind, delivered);
            Ok(())
        }
        Ok(PollOutcome::NotNotifyWorthy(kind)) => {
            info!(
                "Single poll => {} ({})",
                running.streamer(),
                kind.map(|k| k.to_string()).unwrap_or_else(|| "not found".to_string())
            );
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::Notify => {
            warn!("Single poll => notification failed: {}", e);
            Err(e.into())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Status check failed")),
    }
}
