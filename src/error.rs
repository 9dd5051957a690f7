//! Error types for roster operations.

use std::io;

/// Specialized error type for roster operations
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Raw name text that does not fit the composite format
    #[error("malformed name {name:?}: {reason}")]
    MalformedName { name: String, reason: &'static str },

    /// Record rejected by a field-level constraint
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Positional operation past the end of the table
    #[error("index {index} out of range for table of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// Error reading or writing the sink file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Alias for Result with `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;
