//! # Error Types
//!
//! Structured error types for storativity_core. Selection errors carry the
//! dimension, the rejected key and the accepted keys so a front end can show
//! the user exactly what it expected.
//!
//! ## Example
//!
//! ```rust
//! use storativity_core::errors::{CalcError, CalcResult};
//!
//! fn parse_level(key: &str) -> CalcResult<&'static str> {
//!     match key {
//!         "min" => Ok("min"),
//!         "max" => Ok("max"),
//!         _ => Err(CalcError::invalid_selection("alpha", key, &["min", "max"])),
//!     }
//! }
//!
//! assert_eq!(parse_level("huge").unwrap_err().error_code(), "INVALID_SELECTION");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for storativity_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for lookup and calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A category key is not one of the enumerated values for its dimension
    #[error("Invalid selection for '{dimension}': '{value}' (expected one of: {})", .allowed.join(", "))]
    InvalidSelection {
        dimension: String,
        value: String,
        allowed: Vec<String>,
    },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material name not recognised
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// A lookup table is malformed or incomplete
    #[error("Table error in {table}: {reason}")]
    TableError { table: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidSelection error
    pub fn invalid_selection(dimension: impl Into<String>, value: impl Into<String>, allowed: &[&str]) -> Self {
        CalcError::InvalidSelection {
            dimension: dimension.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a TableError
    pub fn table_error(table: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::TableError {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a caller passing a key outside its enumeration
    pub fn is_selection_error(&self) -> bool {
        matches!(self, CalcError::InvalidSelection { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidSelection { .. } => "INVALID_SELECTION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::TableError { .. } => "TABLE_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
