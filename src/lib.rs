//! Saiyan MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing tools over the public
//! Dragon Ball API: a power ranking of the Z fighter Saiyans, character
//! profiles, a battle simulator, a greeting and a JSON vs TOON renderer.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **roster**: fetching, normalizing, scoring and battling characters
//!   - **tools**: MCP tools that adapt the roster domain for clients
//!
//! # Example
//!
//! ```rust,no_run
//! use saiyan_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
