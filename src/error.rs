//! Error types for schema aggregation

use thiserror::Error;

/// Defects detected while folding a form schema into a validation schema
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields share a name, so one rule would silently shadow the other
    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    /// A select or radio field was declared without any options
    #[error("field {name} requires options but has none")]
    MissingOptions { name: String },
}
