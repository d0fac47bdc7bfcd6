use thiserror::Error;

use crate::validation::ErrorTree;

/// An entity or schema-validated object could not be constructed.
///
/// Raised at construction time of entities and search results. The error tree
/// lists every violated rule keyed by field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Entity validation error")]
pub struct EntityValidationError {
    /// Per-field validation messages.
    pub errors: ErrorTree,
}

impl EntityValidationError {
    pub fn new(errors: ErrorTree) -> Self {
        Self { errors }
    }
}

/// An identifier string does not have the UUID v4 shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ID must be a valid UUID v4: '{value}'")]
pub struct InvalidIdError {
    /// The offending value, as supplied by the caller.
    pub value: String,
}
