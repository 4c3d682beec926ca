//! Reference data errors.

use thiserror::Error;

use crate::types::TypeNumber;

/// Errors raised while loading or validating reference data.
///
/// These are configuration defects: they surface once, when an engine is
/// built, and never from a scoring call.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A table has the wrong number of rows or columns.
    #[error("Shape error in {table}: {reason}")]
    Shape { table: &'static str, reason: String },

    /// A type-keyed table has no row for a type.
    #[error("{table} has no entry for type {type_number}")]
    MissingType {
        table: &'static str,
        type_number: TypeNumber,
    },

    /// A keyed table lists the same key twice.
    #[error("{table} lists {key} more than once")]
    Duplicate { table: &'static str, key: String },

    /// A row is present but its content is inconsistent.
    #[error("Invalid {table} entry: {reason}")]
    Invalid { table: &'static str, reason: String },
}

impl ReferenceError {
    pub(crate) fn shape(table: &'static str, reason: impl Into<String>) -> Self {
        Self::Shape {
            table,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(table: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            table,
            reason: reason.into(),
        }
    }
}
