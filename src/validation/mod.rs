//! Schema validators and the structured error tree they report.
//!
//! Each schema has its own validator object implementing [`Validator`]. A
//! validator never panics or returns early on the first problem: it collects
//! every violated rule into an [`ErrorTree`] keyed by field. Coercion rules
//! (trimming, case folding, numeric parsing with fallback) live in [`coerce`]
//! as plain functions so each can be tested on its own.

pub mod category;
pub mod coerce;
pub mod search;

use serde::Serialize;
use std::collections::BTreeMap;

/// Schema validator contract.
///
/// Returns the normalized data on success or the per-field error tree on
/// failure. Ordinary invalid input is reported, never panicked on.
pub trait Validator {
    /// Raw data handed to the validator.
    type Input;
    /// Normalized data produced on success.
    type Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ErrorTree>;
}

/// Per-field validation errors.
///
/// Serializes as `{"_errors": [...], "<field>": { "_errors": [...], ... }}`.
/// Nested fields are used for collection members, keyed by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorTree {
    #[serde(rename = "_errors")]
    errors: Vec<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message at this level of the tree.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Returns the subtree for `field`, creating it when missing.
    pub fn field_mut(&mut self, field: impl Into<String>) -> &mut ErrorTree {
        self.fields.entry(field.into()).or_default()
    }

    /// Adds a message under `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_mut(field).push(message);
    }

    /// Returns the subtree for `field`, if any error was recorded under it.
    pub fn field(&self, field: &str) -> Option<&ErrorTree> {
        self.fields.get(field)
    }

    /// Messages recorded at this level.
    pub fn messages(&self) -> &[String] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.fields.values().all(ErrorTree::is_empty)
    }

    /// Finishes a validation pass: `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorTree> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}
