//! Alias creation, resolution and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{
    AliasGenerator, DEFAULT_ALIAS_LENGTH, MAX_GENERATED_ALIAS_LENGTH, MIN_GENERATED_ALIAS_LENGTH,
};
use crate::utils::validation::{
    RESERVED_ALIASES, require_alias, validate_alias, validate_target_url,
};

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service guaranteeing a one-to-one relation between aliases and URLs.
///
/// Holds no mapping state of its own. Uniqueness races between concurrent
/// callers are settled by the repository's storage constraints.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn AliasGenerator>,
    alias_length: usize,
    max_attempts: usize,
}

impl MappingService {
    /// Creates a service with the default alias length and retry budget.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn AliasGenerator>,
    ) -> Self {
        Self {
            repository,
            generator,
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the length of generated aliases, clamped to
    /// [`MIN_GENERATED_ALIAS_LENGTH`]..=[`MAX_GENERATED_ALIAS_LENGTH`].
    pub fn with_alias_length(mut self, alias_length: usize) -> Self {
        self.alias_length =
            alias_length.clamp(MIN_GENERATED_ALIAS_LENGTH, MAX_GENERATED_ALIAS_LENGTH);
        self
    }

    /// Overrides how many generated candidates are tried.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn alias_length(&self) -> usize {
        self.alias_length
    }

    /// Creates a mapping for `target_url`.
    ///
    /// A missing or empty `alias` means "generate one".
    ///
    /// # Code Generation
    ///
    /// Generated candidates that collide with an existing alias are replaced
    /// by fresh ones, up to the configured number of attempts. Reserved route
    /// words count as collisions. A URL conflict
    /// is never retried since no alias can resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL or custom alias is malformed;
    /// storage is not touched in that case.
    ///
    /// Returns [`AppError::UrlExists`] / [`AppError::AliasExists`] on conflicts.
    ///
    /// Returns [`AppError::AliasGenerationExhausted`] if every generated
    /// candidate collided.
    pub async fn create(
        &self,
        target_url: String,
        alias: Option<String>,
    ) -> Result<Mapping, AppError> {
        validate_target_url(&target_url)?;

        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(&alias)?;
                let mapping = self
                    .repository
                    .create(NewMapping { target_url, alias })
                    .await?;
                tracing::info!(id = mapping.id, alias = %mapping.alias, "Mapping created");
                Ok(mapping)
            }
            None => self.create_with_generated_alias(target_url).await,
        }
    }

    async fn create_with_generated_alias(&self, target_url: String) -> Result<Mapping, AppError> {
        for attempt in 1..=self.max_attempts {
            let alias = self.generator.generate(self.alias_length);

            // A reserved word would be stored but shadowed by a fixed route.
            if RESERVED_ALIASES.contains(&alias.as_str()) {
                tracing::warn!(attempt, alias = %alias, "Generated alias is reserved, retrying");
                continue;
            }

            let new_mapping = NewMapping {
                target_url: target_url.clone(),
                alias,
            };

            match self.repository.create(new_mapping).await {
                Ok(mapping) => {
                    tracing::info!(
                        id = mapping.id,
                        alias = %mapping.alias,
                        attempt,
                        "Mapping created with generated alias"
                    );
                    return Ok(mapping);
                }
                Err(AppError::AliasExists) => {
                    tracing::warn!(attempt, "Generated alias collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "Exhausted alias generation attempts"
        );

        Err(AppError::AliasGenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for an empty alias and
    /// [`AppError::AliasNotFound`] if no mapping exists.
    pub async fn lookup(&self, alias: &str) -> Result<String, AppError> {
        require_alias(alias)?;
        self.repository.find_target_url(alias).await
    }

    /// Deletes the mapping for an alias.
    ///
    /// Not idempotent: a second call for the same alias fails with
    /// [`AppError::AliasNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for an empty alias and
    /// [`AppError::AliasNotFound`] if no mapping exists.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        require_alias(alias)?;
        self.repository.delete(alias).await?;
        tracing::info!(alias, "Mapping deleted");
        Ok(())
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
