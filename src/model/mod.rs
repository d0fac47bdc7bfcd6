//! Transport-agnostic data transfer objects.
//!
//! These types cross the boundary between the catalog core and whatever layer
//! presents it (the bundled CLI, or an external transport). They carry no
//! behaviour beyond serialization.

pub mod api;
pub mod category;
pub mod pagination;
pub mod search;
