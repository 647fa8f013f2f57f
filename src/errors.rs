use thiserror::Error;

/// Error type for configuration, persistence and snapshot failures.
///
/// Business computations never produce one of these; they return zero-valued
/// or insufficient results instead.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
