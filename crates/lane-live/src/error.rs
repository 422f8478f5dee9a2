//! Error type for the live updater/dispatcher (spec §7's "Fatal" class).

use lane_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiveError {
    /// The shared graph's lock was poisoned by a panic in another worker.
    /// Per §7, a worker logs at `error!` and exits its loop rather than
    /// panicking the process itself.
    #[error("graph lock poisoned by a panicked worker")]
    Poisoned,

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("{0} channel disconnected")]
    Disconnected(&'static str),
}

impl<T> From<std::sync::PoisonError<T>> for LiveError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        LiveError::Poisoned
    }
}

pub type LiveResult<T> = Result<T, LiveError>;
