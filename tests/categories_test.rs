mod common;

use axum::http::Method;
use common::{response_json, TestApp, API};
use serde_json::{json, Value};

fn collection() -> String {
    format!("{}/category/", API)
}

fn item(id: i64) -> String {
    format!("{}/category/{}", API, id)
}

async fn create(app: &TestApp, payload: Value) -> Value {
    let response = app.as_admin(Method::POST, &collection(), Some(payload)).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Category created successfully.");
    body["data"]["category"].clone()
}

#[tokio::test]
async fn category_lifecycle() {
    let app = TestApp::new().await;

    let phones = create(&app, json!({ "name": "Phones", "description": "Mobile devices" })).await;
    let laptops = create(&app, json!({ "name": "Laptops" })).await;
    assert_eq!(phones["name"], "Phones");
    assert_eq!(phones["description"], "Mobile devices");
    assert!(laptops["description"].is_null());

    let list = response_json(app.as_admin(Method::GET, &collection(), None).await).await;
    assert_eq!(list["message"], "Categories retrieved successfully.");
    let names: Vec<&str> = list["data"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptops", "Phones"]);

    let id = phones["id"].as_i64().unwrap();
    let shown = response_json(app.as_admin(Method::GET, &item(id), None).await).await;
    assert_eq!(shown["data"]["category"], phones);

    let response = app
        .as_admin(Method::PATCH, &item(id), Some(json!({ "description": null })))
        .await;
    assert_eq!(response.status(), 200);
    let updated = response_json(response).await;
    assert_eq!(updated["message"], "Category updated successfully.");
    assert_eq!(updated["data"]["category"]["name"], "Phones");
    assert!(updated["data"]["category"]["description"].is_null());

    let response = app.as_admin(Method::DELETE, &item(id), None).await;
    assert_eq!(response.status(), 200);
    let deleted = response_json(response).await;
    assert_eq!(deleted["message"], "Category deleted successfully.");
    assert!(deleted.get("data").is_none());

    let response = app.as_admin(Method::GET, &item(id), None).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response_json(response).await["message"], "Category not found.");
}

#[tokio::test]
async fn name_rules() {
    let app = TestApp::new().await;

    let response = app.as_admin(Method::POST, &collection(), Some(json!({}))).await;
    assert_eq!(response.status(), 422);
    assert_eq!(
        response_json(response).await["errors"],
        json!({ "name": ["The name field is required."] })
    );

    let response = app
        .as_admin(Method::POST, &collection(), Some(json!({ "name": "TV" })))
        .await;
    assert_eq!(
        response_json(response).await["errors"]["name"],
        json!(["The name field must be at least 3 characters."])
    );

    let response = app
        .as_admin(
            Method::POST,
            &collection(),
            Some(json!({ "name": "x".repeat(256) })),
        )
        .await;
    assert_eq!(
        response_json(response).await["errors"]["name"],
        json!(["The name field must not be greater than 255 characters."])
    );
}

#[tokio::test]
async fn description_is_bounded() {
    let app = TestApp::new().await;
    let response = app
        .as_admin(
            Method::POST,
            &collection(),
            Some(json!({ "name": "Tablets", "description": "d".repeat(1001) })),
        )
        .await;

    assert_eq!(response.status(), 422);
    assert_eq!(
        response_json(response).await["errors"]["description"],
        json!(["The description field must not be greater than 1000 characters."])
    );
}
