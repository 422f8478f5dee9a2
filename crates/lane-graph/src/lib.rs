//! `lane-graph` — the graph store, edge cost model, and time-expanded
//! Dijkstra engine.
//!
//! | Module      | Contents                                                 |
//! |-------------|-------------------------------------------------------------|
//! | [`facility`]| `Facility` — graph node payload                          |
//! | [`route`]   | `Route`, `EdgeCostAttributes`, `Direction`/`Forward`/`Reverse` |
//! | [`graph`]   | `Graph` — the mutable, append-only node/edge store       |
//! | [`router`]  | `shortest_path_forward`/`_reverse`, `Path`, `Segment`    |
//! | [`error`]   | `GraphError`, `GraphResult`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | Use `rustc_hash::FxHashMap` for the by-code lookup tables.  |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.          |

pub mod error;
pub mod facility;
pub mod graph;
pub mod route;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use facility::Facility;
pub use graph::Graph;
pub use route::{get_next_departure, Direction, EdgeCostAttributes, Forward, Reverse, Route};
pub use router::{shortest_path_forward, shortest_path_reverse, Path, Segment};
