//! HTTP server startup logic.
//!
//! Plain HTTP only. The listener is bound once; a failed bind is returned to
//! the caller and ends the process. Each accepted connection is served on its
//! own task by axum's accept loop.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::listen_addr;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server on the fixed listen address.
///
/// This function blocks until the server stops, which in practice means until
/// the process is killed.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let listener = bind(listen_addr()).await?;
    serve(listener, app).await
}

/// Bind a TCP listener, without retrying.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let local = listener.local_addr().unwrap_or(addr);
    tracing::info!(addr = %local, "Starting HTTP server (no TLS)");
    Ok(listener)
}

/// Serve `app` on an already bound listener.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
