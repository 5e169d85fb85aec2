//! STDIO transport: the host spawns the server and talks over stdin/stdout.
//!
//! Logs go to stderr so they never interleave with protocol frames.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single host over stdin/stdout until it disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("Ready - communicating via stdin/stdout");

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished: {:?}", reason);
        Ok(())
    }
}
