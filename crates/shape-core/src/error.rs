//! Error types for record validation and projection

use thiserror::Error;

/// Result type alias using the shape Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for configuration records and shapes
#[derive(Error, Debug)]
pub enum Error {
    // Validation errors
    #[error("Unknown field for {record}: {field}")]
    SchemaViolation { record: String, field: String },

    #[error("Invalid value for {record}.{field}: expected {expected}, found {found}")]
    TypeViolation {
        record: String,
        field: String,
        expected: String,
        found: String,
    },

    // Projection errors
    #[error("Cannot project {source_record} onto {target}: {source}")]
    ProjectionConstructionFailure {
        source_record: String,
        target: String,
        source: Box<Error>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn schema_violation(record: &str, field: impl Into<String>) -> Self {
        Error::SchemaViolation {
            record: record.to_string(),
            field: field.into(),
        }
    }

    pub(crate) fn type_violation(
        record: &str,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Error::TypeViolation {
            record: record.to_string(),
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns true if the error was raised by field validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::SchemaViolation { .. } | Error::TypeViolation { .. }
        )
    }

    /// Path of the offending field, if the error names one
    ///
    /// Projection failures report the field of the underlying violation.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Error::SchemaViolation { field, .. } | Error::TypeViolation { field, .. } => {
                Some(field)
            }
            Error::ProjectionConstructionFailure { source, .. } => source.field_path(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
