use async_trait::async_trait;
use error_stack::Result;

use crate::{
    client::history::{format_entry, HistoryLoader, HistoryState},
    test::{QaState, TestError},
};

use super::QaAction;

/// Load the history with a new loader.
#[derive(Debug)]
pub struct LoadHistory;

#[async_trait]
impl QaAction for LoadHistory {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        state.history = HistoryLoader::new(state.api.clone());
        state.history.load().await;
        Ok(())
    }
}

#[derive(Debug)]
pub struct AssertHistoryLoaded;

#[async_trait]
impl QaAction for AssertHistoryLoaded {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        match state.history.state() {
            HistoryState::Success { .. } | HistoryState::Empty => Ok(()),
            other => Err(TestError::AssertError(format!("history state: {:?}", other)).into()),
        }
    }
}

/// Some history row contains the text.
#[derive(Debug)]
pub struct AssertHistoryRow(pub &'static str);

#[async_trait]
impl QaAction for AssertHistoryRow {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        let rows: Vec<String> = match state.history.state() {
            HistoryState::Success { entries } => entries.iter().map(format_entry).collect(),
            _ => vec![],
        };

        if rows.iter().any(|row| row.contains(self.0)) {
            Ok(())
        } else {
            Err(TestError::AssertError(format!(
                "history rows: {:?}, expected row: {:?}",
                rows, self.0
            ))
            .into())
        }
    }
}
