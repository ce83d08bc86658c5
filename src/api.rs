//! Access to the remote calculation service.
//!
//! Controllers only see the [RemoteCalculator] trait, so the HTTP client can
//! be replaced with an in-memory implementation.

pub mod data;
pub mod remote;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use error_stack::Result;

use self::data::{HistoryEntry, Operation};

/// Failure of one remote call. The message is opaque display text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Service answered with a non-success status.
    #[error("{0}")]
    Service(String),
    /// Service unreachable or response body malformed.
    #[error("{0}")]
    Transport(String),
}

impl RemoteError {
    pub fn message(&self) -> &str {
        match self {
            Self::Service(message) | Self::Transport(message) => message,
        }
    }
}

#[async_trait]
pub trait RemoteCalculator: Send + Sync + 'static {
    /// Calculate `a <operation> b`. The service stores the calculation to
    /// its history.
    async fn compute(&self, a: f64, b: f64, operation: Operation) -> Result<f64, RemoteError>;

    /// Stored calculations in the order the service returns them.
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, RemoteError>;
}
