//! Category catalog.
//!
//! A small category catalog built around a generic search engine: paging,
//! sorting and filtering requests are normalized into [`domain::search::SearchParams`],
//! run by a [`data::SearchableRepository`] (in memory or over SQLite through SeaORM)
//! and returned as a validated [`domain::search::SearchResult`] that maps onto a
//! [`model::pagination::PaginationOutputDto`].

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod validation;
