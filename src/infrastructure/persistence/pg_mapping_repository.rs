//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::{UniqueViolation, unique_violation};

/// PostgreSQL repository for alias mappings.
///
/// Every operation is a single autocommit statement, so a successful call is
/// visible to all subsequent readers of the same database.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO mappings (target_url, alias) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new_mapping.target_url)
        .bind(&new_mapping.alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(UniqueViolation::TargetUrl) => AppError::UrlExists,
            Some(UniqueViolation::Alias) => AppError::AliasExists,
            None => AppError::Database(e),
        })?;

        Ok(new_mapping.into_mapping(id))
    }

    async fn find_target_url(&self, alias: &str) -> Result<String, AppError> {
        let target_url: Option<String> =
            sqlx::query_scalar("SELECT target_url FROM mappings WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await?;

        target_url.ok_or(AppError::AliasNotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM mappings WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AliasNotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
