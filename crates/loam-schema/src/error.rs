//! Errors raised while validating schemas and values.

use thiserror::Error;

use crate::Kind;

/// Errors that can occur while validating a schema or checking a value.
///
/// Every operation stops at the first error; `path` locates it, with `$` as
/// the root value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("unknown kind `{kind}` at {path}")]
    UnknownKind { path: String, kind: String },

    #[error("invalid `optional` at {path}: expected boolean, got {found}")]
    OptionFormat { path: String, found: &'static str },

    #[error("default value at {path} does not satisfy its node: {source}")]
    DefaultValueMismatch {
        path: String,
        #[source]
        source: Box<SchemaError>,
    },

    #[error("missing field `{field}` at {path}")]
    MissingField { path: String, field: String },

    #[error("type mismatch at {path}: expected {expected}, got {found}")]
    TypeMismatch {
        path: String,
        expected: Kind,
        found: &'static str,
    },

    #[error("no item schema for element {index} at {path} ({items} item schemas)")]
    ItemOutOfRange {
        path: String,
        index: usize,
        items: usize,
    },
}

impl SchemaError {
    /// Stable code for this kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::UnknownKind { .. } => "unknown-kind",
            SchemaError::OptionFormat { .. } => "option-format",
            SchemaError::DefaultValueMismatch { .. } => "default-value-mismatch",
            SchemaError::MissingField { .. } => "missing-field",
            SchemaError::TypeMismatch { .. } => "type-mismatch",
            SchemaError::ItemOutOfRange { .. } => "item-out-of-range",
        }
    }

    /// Path of the schema node or value the error was raised at.
    pub fn path(&self) -> &str {
        match self {
            SchemaError::UnknownKind { path, .. }
            | SchemaError::OptionFormat { path, .. }
            | SchemaError::DefaultValueMismatch { path, .. }
            | SchemaError::MissingField { path, .. }
            | SchemaError::TypeMismatch { path, .. }
            | SchemaError::ItemOutOfRange { path, .. } => path,
        }
    }
}
