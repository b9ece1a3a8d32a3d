//! hitcounter server
//!
//! - `GET /` increments the `hits` counter in Redis and renders it
//! - `/healthz`, `/readyz` for orchestration
//! - graceful shutdown on SIGINT / SIGTERM

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hitcounter_core::error::{HitError, Result};
use hitcounter_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let listen = cfg.listen_addr()?;

    let state = AppState::from_config(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "hitcounter starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HitError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HitError::Internal(format!("server failed: {e}")))?;

    tracing::info!("hitcounter stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
