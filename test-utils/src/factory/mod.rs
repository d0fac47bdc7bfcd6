//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert the row into the test database and return the
//! stored model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let category = factory::category::create_category(&db).await?;
//!
//!     let custom = factory::category::CategoryFactory::new(&db)
//!         .name("Documentary")
//!         .is_active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod helpers;

pub use category::{create_categories, create_category};
