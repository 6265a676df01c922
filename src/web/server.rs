//! Server lifecycle: bind, serve, shut down on Ctrl-C.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::web::router::build_router;
use crate::web::state::AppState;
use crate::MindcheckError;

/// Bind `addr` and serve the page until Ctrl-C.
///
/// # Errors
/// Returns error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), MindcheckError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| MindcheckError::Bind { addr, source })?;
    let local = listener.local_addr()?;

    tracing::info!(addr = %local, "Assessment page listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
