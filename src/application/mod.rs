//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::mapping_service::MappingService`] - Alias creation, resolution and deletion

pub mod services;
