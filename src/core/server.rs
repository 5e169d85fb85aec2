//! MCP Server implementation and lifecycle management.
//!
//! The server handler owns the tool router and answers `tools/list` and
//! `tools/call` through rmcp's `#[tool_handler]` macro. Every tool shares
//! one [`RosterFetcher`] built from the roster configuration.
//!
//! The ToolRouter is built in `domains/tools/router.rs`; adding a tool does
//! not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{
    roster::RosterFetcher,
    tools::{ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Dragon Ball Z fighter Saiyan tools. Use list_saiyans_z for a power \
ranking, saiyan_profile for a single character, simulate_battle to pit two Saiyans against each \
other, say_hello for a greeting and compare_formats to see the ranking as JSON and TOON.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the roster HTTP client cannot be built.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);
        let fetcher = RosterFetcher::from_config(&config.roster)?;

        info!(
            endpoint = %config.roster.endpoint,
            retries = fetcher.retries(),
            "Roster fetcher ready"
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(fetcher),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Metadata of every registered tool.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
