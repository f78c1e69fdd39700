//! Error types for the plotting backend.
//!
//! Configuration problems and dispatch failures are raised here; anything
//! that goes wrong inside polars or while building an element is wrapped
//! unchanged.

use crate::kind::PlotKind;
use hv_elements::ElementError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Conflicting or malformed plotting keywords
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A kind name that matches no chart kind at all
    #[error("Unknown plot kind '{0}'")]
    UnknownKind(String),

    /// A valid chart kind the target (frame or series) does not implement
    #[error("Plot kind '{kind}' is not supported for {target} data")]
    UnsupportedKind { kind: PlotKind, target: &'static str },

    /// A chart kind called without a coordinate it cannot infer
    #[error("{kind} plot requires '{missing}' to be given")]
    MissingCoordinates { kind: PlotKind, missing: &'static str },

    /// A pass-through keyword with a value of the wrong type
    #[error("Invalid value for keyword '{key}': expected {expected}")]
    InvalidKeyword { key: String, expected: String },

    /// Index does not line up with the data it labels
    #[error("Index length mismatch: data has {expected} rows, index has {actual}")]
    IndexLength { expected: usize, actual: usize },

    #[error("No plotting engine registered as '{0}'")]
    UnknownEngine(String),

    #[error("Element error: {0}")]
    ElementError(#[from] ElementError),

    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

impl PlotError {
    /// Create a ConfigError with a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an InvalidKeyword error
    pub fn invalid_keyword(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// Create an UnsupportedKind error
    pub fn unsupported_kind(kind: PlotKind, target: &'static str) -> Self {
        Self::UnsupportedKind { kind, target }
    }

    /// Create a MissingCoordinates error
    pub fn missing_coordinates(kind: PlotKind, missing: &'static str) -> Self {
        Self::MissingCoordinates { kind, missing }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
