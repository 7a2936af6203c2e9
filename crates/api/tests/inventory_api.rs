use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stockroom_api::app::{build_app, services::AppServices};
use stockroom_infra::{FileSlotStore, InMemoryInventoryStore, InventoryStore};

fn test_app() -> Router {
    let store: Arc<dyn InventoryStore> = Arc::new(InMemoryInventoryStore::new());
    build_app(Arc::new(AppServices::with_store(store)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

fn stapler() -> Value {
    json!({
        "name": "Stapler",
        "category": "Office Supplies",
        "quantity": 3,
        "price": 7.5,
        "threshold": 2,
        "supplier": "Office Essentials"
    })
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn lists_seed_items_with_stock_labels() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/inventory/items", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(body[5]["stockLabel"], "Out of Stock");
    assert_eq!(body[2]["stockStatus"], "low_stock");
    assert_eq!(body[0]["lastUpdated"], "2023-06-01T00:00:00Z");
}

#[tokio::test]
async fn filters_by_query_string() {
    let app = test_app();

    let (_, body) = send(&app, Method::GET, "/inventory/items?search=tech", None).await;
    assert_eq!(ids(&body), vec![1, 3, 7]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/inventory/items?category=Furniture&stock_status=normal",
        None,
    )
    .await;
    assert_eq!(ids(&body), vec![2, 8]);

    let (status, body) = send(&app, Method::GET, "/inventory/items?stock_status=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn create_then_fetch_item() {
    let app = test_app();

    let (status, created) = send(&app, Method::POST, "/inventory/items", Some(stapler())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 9);
    assert_eq!(created["price"], 7.5);

    let (status, fetched) = send(&app, Method::GET, "/inventory/items/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Stapler");
}

#[tokio::test]
async fn create_rejects_invalid_price() {
    let app = test_app();
    let mut body = stapler();
    body["price"] = json!(0);

    let (status, err) = send(&app, Method::POST, "/inventory/items", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "price must be a positive number");

    let (_, list) = send(&app, Method::GET, "/inventory/items", None).await;
    assert_eq!(list.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn create_rejects_unrepresentable_stock_value() {
    let app = test_app();
    let body: Value = serde_json::from_str(
        r#"{"name":"Gold Bar","category":"Vault","quantity":1000000000,
            "price":100000000000000000000,"threshold":1}"#,
    )
    .unwrap();

    let (status, err) = send(&app, Method::POST, "/inventory/items", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "validation_error");

    let (status, stats) = send(&app, Method::GET, "/inventory/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalItems"], 8);
}

#[tokio::test]
async fn prices_keep_full_precision() {
    let app = test_app();
    let body: Value = serde_json::from_str(
        r#"{"name":"Caliper","category":"Tools","quantity":2,
            "price":19.123456789012345678,"threshold":1}"#,
    )
    .unwrap();

    let (status, created) = send(&app, Method::POST, "/inventory/items", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fetched) = send(&app, Method::GET, "/inventory/items/9", None).await;
    assert_eq!(fetched["price"].to_string(), "19.123456789012345678");
    assert_eq!(fetched["price"], created["price"]);
}

#[tokio::test]
async fn update_replaces_and_unknown_is_404() {
    let app = test_app();
    let mut body = stapler();
    body["name"] = json!("Wireless Mouse");
    body["category"] = json!("Electronics");
    body["quantity"] = json!(40);

    let (status, updated) = send(&app, Method::PUT, "/inventory/items/3", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["quantity"], 40);

    let (_, low) = send(&app, Method::GET, "/inventory/low-stock", None).await;
    assert!(ids(&low).is_empty());

    let (status, err) = send(&app, Method::PUT, "/inventory/items/77", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "not_found");
}

#[tokio::test]
async fn delete_twice_is_204_then_404() {
    let app = test_app();

    let (status, _) = send(&app, Method::DELETE, "/inventory/items/6", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, "/inventory/items/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, out) = send(&app, Method::GET, "/inventory/out-of-stock", None).await;
    assert!(ids(&out).is_empty());
}

#[tokio::test]
async fn quantity_stepper_updates_status() {
    let app = test_app();

    let (status, item) = send(
        &app,
        Method::POST,
        "/inventory/items/6/quantity",
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["stockLabel"], "Low Stock");

    let (status, _) = send(
        &app,
        Method::POST,
        "/inventory/items/6/quantity",
        Some(json!({ "quantity": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/inventory/items/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn stats_and_categories() {
    let app = test_app();

    let (_, stats) = send(&app, Method::GET, "/inventory/stats", None).await;
    assert_eq!(stats["totalItems"], 8);
    assert_eq!(stats["outOfStock"], 1);
    assert_eq!(stats["lowStock"], 1);
    assert_eq!(stats["inStock"], 6);
    assert_eq!(stats["totalValue"], 22359.0);
    assert_eq!(stats["categories"]["Electronics"], 26);

    let (_, categories) = send(&app, Method::GET, "/inventory/categories", None).await;
    assert_eq!(
        categories,
        json!(["Electronics", "Furniture", "Lighting", "Office Supplies"])
    );
}

#[tokio::test]
async fn file_slot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = || -> Arc<dyn InventoryStore> {
        Arc::new(FileSlotStore::new(dir.path(), "inventoryItems"))
    };

    let app = build_app(Arc::new(AppServices::with_store(store())));
    let (status, _) = send(&app, Method::POST, "/inventory/items", Some(stapler())).await;
    assert_eq!(status, StatusCode::CREATED);
    drop(app);

    let restarted = build_app(Arc::new(AppServices::with_store(store())));
    let (_, body) = send(&restarted, Method::GET, "/inventory/items/9", None).await;
    assert_eq!(body["name"], "Stapler");
}
