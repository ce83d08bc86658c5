//! History loader

use std::sync::Arc;

use error_stack::Result;
use tracing::debug;

use crate::api::{data::HistoryEntry, RemoteCalculator, RemoteError};

pub const NO_HISTORY_MESSAGE: &str = "No calculation history found";

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Success { entries: Vec<HistoryEntry> },
    Empty,
    Failure { message: String },
}

/// Fetches the history once. A failed fetch is not retried.
pub struct HistoryLoader {
    client: Arc<dyn RemoteCalculator>,
    state: HistoryState,
    started: bool,
}

/// Remote call started by [HistoryLoader::start].
pub struct HistoryFetch {
    client: Arc<dyn RemoteCalculator>,
}

impl HistoryFetch {
    pub async fn run(self) -> Result<Vec<HistoryEntry>, RemoteError> {
        self.client.fetch_history().await
    }
}

impl HistoryLoader {
    pub fn new(client: Arc<dyn RemoteCalculator>) -> Self {
        Self {
            client,
            state: HistoryState::Loading,
            started: false,
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Returns None if loading has already been started.
    pub fn start(&mut self) -> Option<HistoryFetch> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(HistoryFetch {
            client: self.client.clone(),
        })
    }

    pub fn finish(&mut self, result: Result<Vec<HistoryEntry>, RemoteError>) {
        self.state = match result {
            Ok(entries) if entries.is_empty() => HistoryState::Empty,
            Ok(entries) => {
                debug!("History entries: {}", entries.len());
                HistoryState::Success { entries }
            }
            Err(e) => {
                debug!("History loading failed: {e:?}");
                HistoryState::Failure {
                    message: e.current_context().message().to_string(),
                }
            }
        };
    }

    /// Fetch and apply the history. Only the first call does anything.
    pub async fn load(&mut self) {
        if let Some(fetch) = self.start() {
            let result = fetch.run().await;
            self.finish(result);
        }
    }
}

/// History row, for example `5 + 3 = 8`.
pub fn format_entry(entry: &HistoryEntry) -> String {
    format!("{} = {}", entry.expression(), entry.result)
}
