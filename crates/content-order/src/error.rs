//! Error types for content ordering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    /// The locale string is not BCP-47 or no collator could be built for it.
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Input records were not valid JSON for the requested collection.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
