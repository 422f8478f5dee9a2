//! The `OutputSink` trait implemented by all result-document backends.

use crate::{OutputResult, ResultDocument};

/// Trait implemented by any bulk writer for result documents — a JSONL file,
/// a log stream, or a search-index client.
///
/// Both methods are fallible; callers decide whether a write error for one
/// document should abort the batch or just be logged and skipped.
pub trait OutputSink {
    /// Write one result document.
    fn write(&mut self, doc: &ResultDocument) -> OutputResult<()>;

    /// Flush and close any underlying resources.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
