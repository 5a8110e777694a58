//! Error handling for the catalog cleaning pipeline.

pub mod util;

use arrow::error::ArrowError;

/// Errors that can occur while cleaning a catalog export
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// Input file unreadable, or its header does not match the expected schema
    #[error("Load error: {0}")]
    LoadError(String),

    /// An expected column is absent from the table
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// An enumerated or typed column holds a value outside its domain
    #[error("Domain error in column '{column}': {message}")]
    DomainError {
        /// Column whose domain was violated
        column: String,
        /// Offending rows and values
        message: String,
    },

    /// A text value does not match the fixed format its column requires
    #[error("Format error in column '{column}': {message}")]
    FormatError {
        /// Column whose format was violated
        column: String,
        /// Offending rows and values
        message: String,
    },

    /// A null rating has no entry in the reference-fill mapping
    #[error("No reference rating for '{0}': null rating cannot be filled")]
    UnmappedNullError(String),

    /// A duration value matches neither the minutes nor the seasons shape
    #[error("Unparseable duration for '{show_id}': {value:?}")]
    UnparseableDurationError {
        /// Identifier of the offending row
        show_id: String,
        /// Raw duration text
        value: String,
    },

    /// Repair configuration unreadable or invalid
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for cleaning operations
pub type Result<T> = std::result::Result<T, CleanError>;
