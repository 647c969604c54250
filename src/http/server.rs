use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::{CardwiseError, Result};
use crate::http::{build_router, AppState};

/// Bind and run the validation service until ctrl-c.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState { config });
    let router = build_router(state.clone());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CardwiseError::Http {
            reason: format!("failed to bind {addr}: {e}"),
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        service = %state.config.service_name,
        addr = %local_addr,
        "server started"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CardwiseError::Http {
            reason: e.to_string(),
        })?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
