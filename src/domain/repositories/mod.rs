//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod mapping_repository;

pub use mapping_repository::{InsertOutcome, MappingRepository};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
