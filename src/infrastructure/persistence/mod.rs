//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every query.

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
