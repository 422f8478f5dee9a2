//! The single-writer/many-reader graph handle (spec §5).
//!
//! Writers (the three ingest workers) take an exclusive handle once per
//! input batch; readers (the solver worker) take a shared handle for the
//! duration of one `solve()` call. `std::sync::RwLock` is used rather than
//! a lock-free structure so a panicking worker poisons the lock instead of
//! silently corrupting graph state — that poisoning is exactly spec §7's
//! "Fatal" class, surfaced here as [`LiveError::Poisoned`](crate::LiveError).

use std::sync::{Arc, RwLock};

use lane_graph::Graph;

/// A graph shared between the ingest workers and the solver worker.
pub type SharedGraph = Arc<RwLock<Graph>>;

/// Wrap a freshly built (or empty) [`Graph`] for sharing across workers.
pub fn shared_graph(graph: Graph) -> SharedGraph {
    Arc::new(RwLock::new(graph))
}
