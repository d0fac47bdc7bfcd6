//! Domain layer: identity, entities and the search value objects.
//!
//! Domain types own their invariants. Entities validate on construction and
//! on every mutation, identities validate their shape, and search results
//! validate their metadata. Nothing in this module touches storage.

pub mod category;
pub mod entity;
pub mod identity;
pub mod search;
