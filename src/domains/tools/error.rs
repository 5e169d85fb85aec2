//! Tool-specific error types.

use thiserror::Error;

use crate::domains::roster::RosterError;

/// Errors that can occur during tool operations.
///
/// Every variant ends up as an error-flagged tool result, so the host can
/// show the message instead of failing the request.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No character in the roster matches the query.
    #[error("Could not find \"{0}\" among the Z fighter Saiyans.")]
    CharacterNotFound(String),

    /// At least one side of a battle could not be resolved.
    #[error("Could not match \"{a}\" and/or \"{b}\" with Z fighter Saiyans.")]
    UnmatchedPairing { a: String, b: String },

    /// The roster could not be fetched.
    #[error("{0}")]
    Roster(#[from] RosterError),

    /// The structured output could not be serialized.
    #[error("Failed to serialize tool output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "character not found" error.
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::CharacterNotFound(query.into())
    }

    /// Create a new "unmatched pairing" error.
    pub fn unmatched(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::UnmatchedPairing {
            a: a.into(),
            b: b.into(),
        }
    }
}
