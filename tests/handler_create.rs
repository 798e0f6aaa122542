mod common;

use alias_shortener::routes::router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(common::create_test_state(pool))).unwrap()
}

#[sqlx::test]
async fn test_create_with_alias(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["alias"], "ex1");
}

#[sqlx::test]
async fn test_create_without_alias_generates_one(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com/generated", "alias": "" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
}

#[sqlx::test]
async fn test_create_duplicate_url(pool: PgPool) {
    common::create_test_mapping(&pool, "google", "https://google.com").await;
    let server = make_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://google.com", "alias": "google2" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "url_exists");
}

#[sqlx::test]
async fn test_create_duplicate_alias(pool: PgPool) {
    common::create_test_mapping(&pool, "taken", "https://example.com").await;
    let server = make_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://other.com", "alias": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "alias_exists");
    assert_eq!(body["error"]["message"], "alias already exists");
}

#[sqlx::test]
async fn test_create_invalid_url(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "invalid_url", "alias": "x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_requires_auth(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.maybe_header("www-authenticate").is_some());
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_rejects_wrong_password(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::WRONG_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
