//! Error types for element construction and operations.
//!
//! `ElementError` covers everything that can go wrong while building an
//! element from a polars frame: missing dimensions, unusable data, failed
//! statistics and errors bubbling up from polars itself.

use polars::error::PolarsError;
use std::error::Error as StdError;
use thiserror::Error;

/// Custom error type for element operations.
///
/// All element constructors and operations return `Result<T, ElementError>`.
#[derive(Debug, Error)]
pub enum ElementError {
    /// A key or value dimension is not a column of the element data
    #[error("Dimension '{dimension}' not found in data for {element}")]
    MissingDimension { dimension: String, element: String },

    /// Data present but not usable for the requested operation
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Too few values for a statistical operation
    #[error("Insufficient data: need at least {min} values, got {actual}")]
    InsufficientData { min: usize, actual: usize },

    /// Overlay stacking failures
    #[error("Stacking error: {message}")]
    StackingError { message: String },

    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic error with context (for wrapping other errors)
    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl ElementError {
    /// Create a MissingDimension error
    pub fn missing_dimension(dimension: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingDimension {
            dimension: dimension.into(),
            element: element.into(),
        }
    }

    /// Create an InvalidData error with a message
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a StackingError with a message
    pub fn stacking_error(message: impl Into<String>) -> Self {
        Self::StackingError {
            message: message.into(),
        }
    }
}

// Conversion from anyhow::Error for convenience
impl From<anyhow::Error> for ElementError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            message: err.to_string(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ElementError>;
