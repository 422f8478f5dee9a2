//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `lane-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("facility {0:?} not found in graph")]
    UnknownFacility(String),

    #[error("route {0:?} not found in graph")]
    UnknownRoute(String),

    #[error("no route from {from:?} to {to:?}")]
    NoPath { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
