use thiserror::Error;

/// Convenience result type used across loading, reporting and the session loop.
pub type ExploreResult<T> = Result<T, ExploreError>;

/// Error type returned by everything that can abort an exploration session.
///
/// Invalid interactive input never shows up here: it is re-prompted locally. Every variant
/// below is a data/source fault (or a closed input stream) and ends the session.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// Underlying I/O error (e.g. city file not found, stdout closed).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the trip schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A statistic asked for a column the dataset does not have.
    #[error("column '{column}' is not present in the dataset")]
    MissingColumn { column: String },

    /// A statistic needed at least one non-null value (e.g. the filters matched no trips).
    #[error("column '{column}' has no values to aggregate")]
    EmptyColumn { column: String },

    /// Standard input reached end-of-file while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}

impl ExploreError {
    pub(crate) fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_owned(),
        }
    }

    pub(crate) fn empty_column(column: &str) -> Self {
        Self::EmptyColumn {
            column: column.to_owned(),
        }
    }
}
