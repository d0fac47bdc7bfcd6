//! Service layer for the category use cases.
//!
//! Services sit between the callers (the CLI) and the repository layer. They parse
//! raw identifiers, drive the domain model's operations, persist through a
//! [`crate::data::SearchableRepository`] and hand back transport-agnostic DTOs.

pub mod category;
