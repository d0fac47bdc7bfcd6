//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the
//! defaults for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let category = fixture::category::entity();
//!
//! let inactive = fixture::category::entity_builder()
//!     .is_active(false)
//!     .build();
//! ```

pub mod category;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
