//! Repository trait for alias mapping storage.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias → target URL mappings.
///
/// Uniqueness of both the alias and the target URL is the implementation's
/// responsibility and must be enforced atomically by the storage itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlExists`] if the target URL is already mapped.
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    /// When both conflict, the URL conflict is reported.
    ///
    /// Returns [`AppError::Database`] on any other storage failure.
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasNotFound`] if no live mapping exists.
    async fn find_target_url(&self, alias: &str) -> Result<String, AppError>;

    /// Removes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasNotFound`] if no live mapping exists.
    async fn delete(&self, alias: &str) -> Result<(), AppError>;

    /// Verifies the storage backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
