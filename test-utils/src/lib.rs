//! Catalog Test Utils
//!
//! Shared testing utilities for the catalog crates. Provides a builder for test
//! contexts backed by in-memory SQLite databases, plus fixtures and factories
//! for category rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, never inserted
//! - **factory**: Entity models inserted into the test database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_category_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_category_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
