//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the roster domain.
    #[error("Roster error: {0}")]
    Roster(#[from] crate::domains::roster::RosterError),

    /// Transport-level failures.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
