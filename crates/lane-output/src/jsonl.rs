//! JSONL output backend.
//!
//! Writes one `ResultDocument` per line to a single file, the shape any bulk
//! search-index loader expects (spec §6's "output sink" consumes a lazy
//! sequence of result documents).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::row::ResultDocument;
use crate::writer::OutputSink;
use crate::OutputResult;

/// Writes result documents to a newline-delimited JSON file.
pub struct JsonlSink {
    out: BufWriter<File>,
    finished: bool,
}

impl JsonlSink {
    /// Create (or truncate) `path` and open it for writing.
    pub fn new(path: impl AsRef<Path>) -> OutputResult<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
            finished: false,
        })
    }
}

impl OutputSink for JsonlSink {
    fn write(&mut self, doc: &ResultDocument) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, doc)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
