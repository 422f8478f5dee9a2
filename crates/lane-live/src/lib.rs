//! `lane-live` — the live updater/dispatcher: five worker threads wired
//! around a shared graph (spec §5).
//!
//! # Worker topology
//!
//! ```text
//! facility records ──▶ facility ingest ──┐
//! route records    ──▶ route ingest     ──┼──▶ SharedGraph (RwLock<Graph>)
//! shipment records ──▶ shipment ingest ──▶ solver ──▶ result sink ──▶ OutputSink
//! ```
//!
//! Three ingest workers mutate the shared graph under a write lock; the
//! solver worker reads it under a read lock for the duration of one
//! `solve()` call. All inter-worker queues are bounded `mpsc::sync_channel`s;
//! producers back off with a short sleep rather than blocking when a queue
//! is full (spec §5).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lane_graph::Graph;
//! use lane_live::LiveSystemBuilder;
//! use lane_output::JsonlSink;
//!
//! let system = LiveSystemBuilder::new(Graph::new(), JsonlSink::new("out.jsonl")?)
//!     .build();
//! system.submit_facility(record)?;
//! system.shutdown();
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod shared;
pub mod solver;
pub mod updater;


pub use builder::{LiveSystem, LiveSystemBuilder, DEFAULT_DEQUEUE_TIMEOUT, DEFAULT_QUEUE_CAPACITY};
pub use error::{LiveError, LiveResult};
pub use shared::{shared_graph, SharedGraph};
pub use solver::{solve, DEFAULT_VEHICLE_FILTER};
