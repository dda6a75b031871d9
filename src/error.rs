use thiserror::Error;

/// Errors raised while building the dashboard's process-scoped state or
/// serving a request against it.
///
/// `row` is the 1-based data row; the CSV header line is not counted.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("data row {row}: payload mass '{value}' is not a non-negative number")]
    InvalidPayload { row: usize, value: String },

    #[error("data row {row}: class '{value}' is not 0 or 1")]
    InvalidOutcome { row: usize, value: String },

    #[error("data row {row}: column '{column}' is empty")]
    EmptyField { row: usize, column: String },

    #[error("dataset contains no launch records")]
    EmptyDataset,

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("unknown chart id '{0}'")]
    UnknownChart(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
