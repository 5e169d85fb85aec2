//! In-memory roster sources for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;

use super::error::RosterError;
use super::source::RosterSource;

/// Always answers with the same payload.
pub struct StaticSource {
    payload: Value,
}

impl StaticSource {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl RosterSource for StaticSource {
    async fn fetch_raw(&self) -> Result<Value, RosterError> {
        Ok(self.payload.clone())
    }
}

/// Replays a fixed script of outcomes and records when each call happened.
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<Value, RosterError>>>,
    calls: Mutex<Vec<Instant>>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<Result<Value, RosterError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RosterSource for ScriptedSource {
    async fn fetch_raw(&self) -> Result<Value, RosterError> {
        self.calls.lock().unwrap().push(Instant::now());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(RosterError::status(599)))
    }
}

/// Always fails with the given status code.
pub struct FailingSource(pub u16);

#[async_trait]
impl RosterSource for FailingSource {
    async fn fetch_raw(&self) -> Result<Value, RosterError> {
        Err(RosterError::status(self.0))
    }
}
