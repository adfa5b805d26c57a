/// Error types for the database layer
use hcr_types::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The indicator records are malformed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// SQLite failed underneath us
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Type alias for Results using DbError
pub type Result<T> = std::result::Result<T, DbError>;
