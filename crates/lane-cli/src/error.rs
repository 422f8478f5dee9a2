use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("ingest error: {0}")]
    Ingest(#[from] lane_ingest::IngestError),
    #[error("output error: {0}")]
    Output(#[from] lane_output::OutputError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
