//! Shared helpers for integration tests: an in-memory database and a
//! router wired exactly like `serve` wires it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use products_manager::api::{create_router, AppState};
use products_manager::config::Config;
use products_manager::infra::Database;

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Fresh migrated SQLite database living in memory.
pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection to :memory: would be its own database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Arc::new(
        Database::connect_with(options)
            .await
            .expect("in-memory database should start"),
    )
}

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET).expect("test secret is long enough")
}

pub async fn test_app() -> Router {
    let database = test_database().await;
    create_router(AppState::from_config(database, &test_config()))
}

/// Response captured for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        location,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
