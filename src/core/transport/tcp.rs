//! TCP transport: one MCP session per accepted connection.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TcpConfig, TransportError, TransportResult};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Accept connections until Ctrl-C, serving each on its own task.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        if let Err(e) = stream.set_nodelay(true) {
                            warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                        }
                        tokio::spawn(Self::serve_connection(server.clone(), stream, peer));
                    }
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        // Avoid spinning on persistent accept errors
                        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
            }
        }
    }

    async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
        info!("Accepted connection from {}", peer);

        let running = match server.serve(stream).await {
            Ok(running) => running,
            Err(e) => {
                warn!("MCP handshake with {} failed: {}", peer, e);
                return;
            }
        };

        match running.waiting().await {
            Ok(_) => info!("Client {} disconnected", peer),
            Err(e) => warn!("Error while serving client {}: {}", peer, e),
        }
    }
}
