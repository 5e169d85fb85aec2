//! Roster-specific error types.

use thiserror::Error;

/// Errors that can occur while fetching the character roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("Invalid JSON in roster response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Every attempt failed; carries the cause of the last one.
    #[error("Failed to fetch roster after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<RosterError>,
    },
}

impl RosterError {
    /// Create a status error.
    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    /// Wrap the last failure once all attempts are used up.
    pub fn exhausted(attempts: u32, last: RosterError) -> Self {
        Self::Exhausted {
            attempts,
            source: Box::new(last),
        }
    }

    /// The failure that ended the last attempt.
    pub fn last_cause(&self) -> &RosterError {
        match self {
            Self::Exhausted { source, .. } => source.last_cause(),
            other => other,
        }
    }
}
