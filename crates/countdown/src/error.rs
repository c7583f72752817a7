//! Error types for countdown operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    /// The event date did not match `YYYY-MM-DD` or names a day that does not exist.
    #[error("Invalid date format: {0}. Expected YYYY-MM-DD.")]
    Format(String),

    /// The instant could not be projected onto a KST year/month/day triple.
    #[error("Failed to extract KST date parts: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, CountdownError>;
