use thiserror::Error;

/// Errors raised while decoding or assembling facility/route/shipment
/// records. These are all the **InvalidFormat** class of spec §7: the
/// offending record is dropped and a warning logged; ingestion continues.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("record parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
