//! The crate's own error type. Sub-crates define richer error enums and wrap
//! or convert from this one via `From`, following the same pattern as the
//! calendar parsers' `InvalidFormat`.

use thiserror::Error;

use crate::time::InvalidFormat;

/// The base error type for `lane-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),
}

impl From<InvalidFormat> for CoreError {
    fn from(e: InvalidFormat) -> Self {
        CoreError::InvalidFormat(e.0)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
