//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: the [`Mapping`] from a short code to
//! its original URL. A separate [`NewMapping`] struct carries the fields for
//! creation, before the database assigns row metadata.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
