//! End-to-end tests for the `/menu` endpoints

use axum_test::TestServer;
use bistro::server::{AppState, router};
use serde_json::{Value, json};

fn create_test_server() -> (TestServer, AppState) {
    let state = AppState::new();
    let app = router(state.clone());
    let server = TestServer::new(app);
    (server, state)
}

fn valid_item() -> Value {
    json!({
        "name": "Paneer Tikka",
        "description": "Chargrilled paneer with peppers",
        "category": "starter",
        "price": 8.5,
        "preparation_time": 20,
        "ingredients": ["paneer", "peppers"],
        "calories": 320,
        "is_vegetarian": true,
        "is_spicy": true
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _) = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_menu_empty() {
    let (server, _) = create_test_server();

    let response = server.get("/menu").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_menu_item() {
    let (server, state) = create_test_server();

    let response = server.post("/menu").json(&valid_item()).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Paneer Tikka");
    assert_eq!(body["price_category"], "Budget");
    assert_eq!(body["dietary_info"], json!(["Vegetarian", "Spicy"]));

    assert_eq!(state.menu.len(), 1);
}

#[tokio::test]
async fn test_create_item_with_invalid_name_returns_422() {
    let (server, state) = create_test_server();

    let mut payload = valid_item();
    payload["name"] = json!("Pizza 2");
    let response = server.post("/menu").json(&payload).await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], "FIELD_CONSTRAINT");
    assert_eq!(body["details"]["field"], "name");

    // Nothing was stored
    assert!(state.menu.is_empty());
}

#[tokio::test]
async fn test_create_spicy_dessert_returns_cross_field_error() {
    let (server, _) = create_test_server();

    let payload = json!({
        "name": "Spicy Cake",
        "description": "A cake with chili flakes",
        "category": "dessert",
        "price": 12.0,
        "preparation_time": 5,
        "ingredients": ["flour"],
        "is_spicy": true
    });
    let response = server.post("/menu").json(&payload).await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], "CROSS_FIELD_RULE");
    assert_eq!(body["details"]["rule"], "spicy_dessert_or_beverage");
}

#[tokio::test]
async fn test_create_item_with_missing_fields_returns_400() {
    let (server, _) = create_test_server();

    let response = server.post("/menu").json(&json!({ "name": "Okra" })).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_get_menu_item_by_id() {
    let (server, _) = create_test_server();

    let created: Value = server.post("/menu").json(&valid_item()).await.json();
    let id = created["id"].as_u64().unwrap();

    let response = server.get(&format!("/menu/{}", id)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "Paneer Tikka");
    assert_eq!(body["category"], "starter");
}

#[tokio::test]
async fn test_get_unknown_item_returns_404() {
    let (server, _) = create_test_server();

    let response = server.get("/menu/99").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn test_get_item_with_bad_id_returns_400() {
    let (server, _) = create_test_server();

    let response = server.get("/menu/not-a-number").await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_ENTITY_ID");
}

#[tokio::test]
async fn test_update_menu_item() {
    let (server, _) = create_test_server();

    let created: Value = server.post("/menu").json(&valid_item()).await.json();
    let id = created["id"].as_u64().unwrap();

    let mut payload = valid_item();
    payload["price"] = json!(30.0);
    let response = server.put(&format!("/menu/{}", id)).json(&payload).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["price"], 30.0);
    assert_eq!(body["price_category"], "Premium");
}

#[tokio::test]
async fn test_update_rejects_invalid_replacement() {
    let (server, _) = create_test_server();

    let created: Value = server.post("/menu").json(&valid_item()).await.json();
    let id = created["id"].as_u64().unwrap();

    let mut payload = valid_item();
    payload["preparation_time"] = json!(500);
    let response = server.put(&format!("/menu/{}", id)).json(&payload).await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    // The stored item is unchanged
    let body: Value = server.get(&format!("/menu/{}", id)).await.json();
    assert_eq!(body["preparation_time"], 20);
}

#[tokio::test]
async fn test_delete_menu_item() {
    let (server, state) = create_test_server();

    let created: Value = server.post("/menu").json(&valid_item()).await.json();
    let id = created["id"].as_u64().unwrap();

    let response = server.delete(&format!("/menu/{}", id)).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert!(state.menu.is_empty());

    let response = server.delete(&format!("/menu/{}", id)).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_reflects_created_items() {
    let (server, _) = create_test_server();

    for _ in 0..3 {
        server.post("/menu").json(&valid_item()).await.assert_status(
            axum::http::StatusCode::CREATED,
        );
    }

    let body: Value = server.get("/menu").await.json();
    assert_eq!(body["count"], 3);
    let ids: Vec<u64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
