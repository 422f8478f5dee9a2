//! Log-backed output sink — writes each result document as a log line
//! instead of to a file, for deployments that ship logs to a console or
//! collector rather than an index.

use crate::row::ResultDocument;
use crate::writer::OutputSink;
use crate::OutputResult;

/// Writes every result document through `log::info!` as a single JSON line.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for LogSink {
    fn write(&mut self, doc: &ResultDocument) -> OutputResult<()> {
        let line = serde_json::to_string(doc)?;
        log::info!("{line}");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
