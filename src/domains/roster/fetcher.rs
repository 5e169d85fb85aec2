//! Roster fetching with retry and linear backoff.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::character::Character;
use super::error::RosterError;
use super::normalize::normalize_character;
use super::source::{HttpRosterSource, RosterSource};
use crate::core::config::RosterConfig;

/// Number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 2;

/// Upper bound on retries; larger requests are capped.
pub const MAX_RETRIES: u32 = 10;

/// Delay unit between attempts; the n-th retry waits `n * BACKOFF_STEP`.
const BACKOFF_STEP: Duration = Duration::from_millis(250);

/// Fetches and normalizes the character roster.
///
/// Cheap to clone; every call to [`fetch_roster`](Self::fetch_roster)
/// hits the source again, nothing is cached.
#[derive(Clone)]
pub struct RosterFetcher {
    source: Arc<dyn RosterSource>,
    retries: u32,
}

impl RosterFetcher {
    /// Create a fetcher over the given source with the default retry count.
    pub fn new(source: Arc<dyn RosterSource>) -> Self {
        Self {
            source,
            retries: DEFAULT_RETRIES,
        }
    }

    /// Create a fetcher for the public API described by `config`.
    pub fn from_config(config: &RosterConfig) -> Result<Self, RosterError> {
        let source = HttpRosterSource::new(config)?;
        info!("Roster endpoint: {}", source.endpoint());
        Ok(Self::new(Arc::new(source)).with_retries(config.retries))
    }

    /// Set the number of retries after the first attempt, capped at
    /// [`MAX_RETRIES`].
    pub fn with_retries(mut self, retries: u32) -> Self {
        if retries > MAX_RETRIES {
            warn!(
                "Requested {} roster retries, capping at {}",
                retries, MAX_RETRIES
            );
        }
        self.retries = retries.min(MAX_RETRIES);
        self
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Fetch the roster, retrying failed attempts.
    ///
    /// Makes up to `retries + 1` attempts, waiting 250ms, 500ms, ... between
    /// them. Either every entry of one successful response is returned, or
    /// an [`RosterError::Exhausted`] carrying the last failure.
    #[instrument(skip(self), fields(retries = self.retries))]
    pub async fn fetch_roster(&self) -> Result<Vec<Character>, RosterError> {
        let attempts = self.retries.saturating_add(1);
        let mut attempt = 0;

        loop {
            match self.source.fetch_raw().await {
                Ok(payload) => {
                    let roster: Vec<Character> =
                        roster_entries(&payload).iter().map(normalize_character).collect();
                    debug!("Fetched {} characters", roster.len());
                    return Ok(roster);
                }
                Err(e) if attempt < self.retries => {
                    let delay = BACKOFF_STEP * (attempt + 1);
                    warn!(
                        attempt = attempt + 1,
                        backoff_ms = delay.as_millis() as u64,
                        "Roster fetch failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!("Roster fetch failed after {} attempt(s): {}", attempts, e);
                    return Err(RosterError::exhausted(attempts, e));
                }
            }
        }
    }
}

/// Unwrap the response envelope: a bare array, or an object with `items`.
fn roster_entries(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}
