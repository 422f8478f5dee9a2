//! `lane-output` — the result document and the output-sink backends
//! (spec §6 response shape, §5 output-sink worker).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`row`]     | `Location`, `PathDocument`, `ResultDocument`            |
//! | [`writer`]  | The `OutputSink` trait                                  |
//! | [`jsonl`]   | `JsonlSink` — one JSON object per line, file-backed     |
//! | [`log_sink`]| `LogSink` — writes through `log::info!`                |
//! | [`error`]   | `OutputError`, `OutputResult`                           |

pub mod error;
pub mod jsonl;
pub mod log_sink;
pub mod row;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use jsonl::JsonlSink;
pub use log_sink::LogSink;
pub use row::{format_wire_datetime, Location, PathDocument, ResultDocument};
pub use writer::OutputSink;
