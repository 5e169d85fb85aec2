//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the default MCP mode - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over TCP sockets - feature: `tcp`
//!
//! Each transport owns the connection lifecycle and hands the byte
//! stream to rmcp, which drives the [`McpServer`] handler.

mod config;
mod error;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

use tracing::info;

use crate::core::McpServer;

/// Runs the MCP server on the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve `server` until the transport shuts down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => stdio::StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => tcp::TcpTransport::new(cfg).run(server).await,
        }
    }
}
