//! In-memory [RemoteCalculator] for controller tests.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use error_stack::{IntoReport, Result};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use super::{
    data::{HistoryEntry, Operation},
    RemoteCalculator, RemoteError,
};

type Reply<T> = std::result::Result<T, RemoteError>;

enum Scripted<T> {
    Ready(Reply<T>),
    /// Resolves when the test sends the reply.
    Gated(oneshot::Receiver<Reply<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Reply<T> {
        match self {
            Self::Ready(reply) => reply,
            Self::Gated(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(RemoteError::Transport("gate dropped".to_string()))),
        }
    }
}

/// Replies are consumed in call order.
#[derive(Default)]
pub struct FakeCalculator {
    compute_replies: Mutex<VecDeque<Scripted<f64>>>,
    history_replies: Mutex<VecDeque<Scripted<Vec<HistoryEntry>>>>,
    compute_calls: Mutex<Vec<(f64, f64, Operation)>>,
    history_calls: AtomicUsize,
}

impl FakeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_compute(&self, reply: Reply<f64>) {
        self.compute_replies
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(reply));
    }

    pub fn push_compute_gated(&self) -> oneshot::Sender<Reply<f64>> {
        let (sender, receiver) = oneshot::channel();
        self.compute_replies
            .lock()
            .unwrap()
            .push_back(Scripted::Gated(receiver));
        sender
    }

    pub fn push_history(&self, reply: Reply<Vec<HistoryEntry>>) {
        self.history_replies
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(reply));
    }

    pub fn compute_calls(&self) -> Vec<(f64, f64, Operation)> {
        self.compute_calls.lock().unwrap().clone()
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCalculator for FakeCalculator {
    async fn compute(&self, a: f64, b: f64, operation: Operation) -> Result<f64, RemoteError> {
        self.compute_calls.lock().unwrap().push((a, b, operation));
        let scripted = self.compute_replies.lock().unwrap().pop_front();
        let reply = match scripted {
            Some(scripted) => scripted.resolve().await,
            None => Err(RemoteError::Transport("no scripted reply".to_string())),
        };
        reply.into_report()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, RemoteError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.history_replies.lock().unwrap().pop_front();
        let reply = match scripted {
            Some(scripted) => scripted.resolve().await,
            None => Err(RemoteError::Transport("no scripted reply".to_string())),
        };
        reply.into_report()
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Log lines emitted by `f` when logging uses `filter`.
pub fn capture_logs(filter: &str, f: impl FnOnce()) -> String {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
