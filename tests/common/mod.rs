#![allow(dead_code)]

use alias_shortener::application::services::MappingService;
use alias_shortener::infrastructure::persistence::PgMappingRepository;
use alias_shortener::state::{AppState, BasicCredentials};
use alias_shortener::utils::alias_generator::RandomAliasGenerator;
use sqlx::PgPool;
use std::sync::Arc;

/// `Authorization` value for `admin:secret`.
pub const VALID_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// `Authorization` value for `admin:wrong`.
pub const WRONG_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

pub async fn create_test_mapping(pool: &PgPool, alias: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO mappings (target_url, alias) VALUES ($1, $2) RETURNING id")
        .bind(url)
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> MappingService {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    MappingService::new(repository, Arc::new(RandomAliasGenerator))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(create_test_service(pool)),
        BasicCredentials::new("admin", "secret"),
    )
}
