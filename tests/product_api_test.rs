//! Product catalog endpoints exercised through the real router.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{delete, get, post, put, test_app};

fn product_body(name: &str, price: f64, quantity: i32) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "price": price,
        "quantity": quantity,
    })
}

#[tokio::test]
async fn test_create_then_fetch_by_location() {
    let app = test_app().await;

    let created = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.location.as_deref(), Some(format!("/products/{}", id).as_str()));

    let fetched = get(&app, &created.location.unwrap()).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
    assert_eq!(fetched.body["name"], "Product1");
    assert_eq!(fetched.body["price"], 10.0);
    assert_eq!(fetched.body["quantity"], 5);
}

#[tokio::test]
async fn test_create_keeps_caller_supplied_id() {
    let app = test_app().await;

    let mut body = product_body("Test Product", 10.0, 5);
    body["id"] = json!(42);

    let created = post(&app, "/products", body).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 42);
    assert_eq!(created.location.as_deref(), Some("/products/42"));
}

#[tokio::test]
async fn test_create_with_taken_id_does_not_overwrite() {
    let app = test_app().await;

    let mut first = product_body("Original", 10.0, 5);
    first["id"] = json!(1);
    assert_eq!(post(&app, "/products", first).await.status, StatusCode::CREATED);

    let mut second = product_body("Duplicate", 20.0, 1);
    second["id"] = json!(1);
    let rejected = post(&app, "/products", second).await;
    assert_eq!(rejected.status, StatusCode::CONFLICT);
    assert_eq!(rejected.body["error"]["code"], "CONFLICT");

    let stored = get(&app, "/products/1").await;
    assert_eq!(stored.body["name"], "Original");
    assert_eq!(get(&app, "/products").await.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_without_description() {
    let app = test_app().await;

    let created = post(
        &app,
        "/products",
        json!({"name": "Product1", "price": 10, "quantity": 5}),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["description"], "");

    let listed = get(&app, "/products").await;
    assert_eq!(listed.body, json!([created.body]));
    assert_eq!(listed.body[0]["name"], "Product1");
    assert_eq!(listed.body[0]["price"], 10.0);
    assert_eq!(listed.body[0]["quantity"], 5);
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let app = test_app().await;

    let response = post(
        &app,
        "/products",
        json!({"name": "", "description": "Description1", "price": 10.0, "quantity": 5}),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["error"]["message"], "Product name is required");
    assert_eq!(get(&app, "/products").await.body, json!([]));
}

#[tokio::test]
async fn test_list_is_empty_then_in_insertion_order() {
    let app = test_app().await;

    let empty = get(&app, "/products").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!([]));

    let first = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    let listed = get(&app, "/products").await;
    assert_eq!(listed.body, json!([first.body.clone()]));

    let second = post(&app, "/products", product_body("Product2", 20.0, 10)).await;
    let listed = get(&app, "/products").await;
    assert_eq!(listed.body, json!([first.body, second.body]));
}

#[tokio::test]
async fn test_get_unknown_product_is_not_found() {
    let app = test_app().await;

    let response = get(&app, "/products/1").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_uses_error_body() {
    let app = test_app().await;

    let fetched = get(&app, "/products/abc").await;
    assert_eq!(fetched.status, StatusCode::BAD_REQUEST);
    assert_eq!(fetched.body["error"]["code"], "VALIDATION_ERROR");

    let deleted = delete(&app, "/products/abc").await;
    assert_eq!(deleted.status, StatusCode::BAD_REQUEST);
    assert_eq!(deleted.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_with_mismatched_id_changes_nothing() {
    let app = test_app().await;
    let created = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    let id = created.body["id"].as_i64().unwrap();

    let mut replacement = product_body("Changed", 99.0, 1);
    replacement["id"] = json!(id + 1);
    let response = put(&app, &format!("/products/{}", id), replacement).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "BAD_REQUEST");
    assert_eq!(get(&app, &format!("/products/{}", id)).await.body, created.body);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let app = test_app().await;

    let mut replacement = product_body("Ghost", 1.0, 1);
    replacement["id"] = json!(7);
    let response = put(&app, "/products/7", replacement).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/products").await.body, json!([]));
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let app = test_app().await;
    let created = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    let id = created.body["id"].as_i64().unwrap();

    let mut replacement = product_body("Renamed", 12.5, 8);
    replacement["id"] = json!(id);
    let response = put(&app, &format!("/products/{}", id), replacement.clone()).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, Value::Null);
    assert_eq!(get(&app, &format!("/products/{}", id)).await.body, replacement);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let app = test_app().await;
    let first = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    let second = post(&app, "/products", product_body("Product2", 20.0, 10)).await;
    let id = first.body["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/products/{}", id)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    assert_eq!(
        get(&app, &format!("/products/{}", id)).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(get(&app, "/products").await.body, json!([second.body]));
}

#[tokio::test]
async fn test_delete_absent_product_is_not_found() {
    let app = test_app().await;
    let kept = post(&app, "/products", product_body("Product1", 10.0, 5)).await;
    let id = kept.body["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/products/{}", id + 100)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/products").await.body, json!([kept.body]));
}
