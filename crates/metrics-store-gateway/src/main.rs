//! metrics-store gateway binary.
//!
//! - Resolve config (YAML file + CLI flags)
//! - Build one AppState around the process-wide store
//! - Serve `/metrics` until SIGINT/SIGTERM, then drain with a bounded wait

use std::future::IntoFuture;
use std::net::{Ipv4Addr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::Notify;
use tracing_subscriber::{fmt, EnvFilter};

use metrics_store_core::error::{MetricsStoreError, Result};
use metrics_store_core::store::MemoryStore;
use metrics_store_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = config::Cli::parse();
    let cfg = match config::resolve(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("metrics-store: {e}");
            return ExitCode::FAILURE;
        }
    };

    let default_level = if cfg.debug { "debug" } else { "info" };
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .init();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "metrics-store exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::MetricsStoreConfig) -> Result<()> {
    let listen = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.server.listen_port));
    let shutdown_timeout = cfg.server.shutdown_timeout();

    let state = AppState::new(cfg, MemoryStore::shared());
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsStoreError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "metrics-store starting");

    let stop = Arc::new(Notify::new());
    let mut server = {
        let stop = Arc::clone(&stop);
        tokio::spawn(
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.notified().await })
                .into_future(),
        )
    };

    tokio::select! {
        res = &mut server => {
            return match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(MetricsStoreError::Internal(format!("server failed: {e}"))),
                Err(e) => Err(MetricsStoreError::Internal(format!("server task failed: {e}"))),
            };
        }
        _ = shutdown_signal() => {}
    }

    state.set_draining();
    stop.notify_one();
    tracing::info!(timeout_ms = shutdown_timeout.as_millis() as u64, "draining in-flight requests");

    match tokio::time::timeout(shutdown_timeout, &mut server).await {
        Ok(Ok(Ok(()))) => tracing::info!("shutdown complete"),
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "server error during shutdown"),
        Ok(Err(e)) => tracing::error!(error = %e, "server task failed during shutdown"),
        Err(_) => {
            tracing::warn!("shutdown timeout elapsed with requests still in flight");
            server.abort();
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
