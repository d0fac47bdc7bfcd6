//! `SeaORM` Entity models for the catalog database.

pub mod prelude;

pub mod category;
