//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur while binding or reading codec columns.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// I/O error, e.g. preparing a database directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A codec value could not be bound or read.
    ///
    /// `column` is the result column index when reading, `None` when binding.
    #[error("conversion error (column {column:?}): {message}")]
    Conversion {
        column: Option<usize>,
        message: String,
    },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::ToSqlConversionFailure(e) => StoreError::Conversion {
                column: None,
                message: e.to_string(),
            },
            rusqlite::Error::FromSqlConversionFailure(idx, _, e) => StoreError::Conversion {
                column: Some(idx),
                message: e.to_string(),
            },
            other => StoreError::Database(other),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
