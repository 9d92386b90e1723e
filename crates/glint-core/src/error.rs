use thiserror::Error;

/// Errors raised while configuring or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output sink rejected a write. The first failure aborts the pass.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid report configuration: {0}")]
    Config(String),

    #[error("failed to parse report input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown severity level `{0}`")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
