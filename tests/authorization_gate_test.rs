//! Bearer-token authentication and the role gate in front of every resource.

mod common;

use axum::http::Method;
use chrono::Utc;
use common::{response_json, valid_repair_request, TestApp, API};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use repairdesk_api::auth::Claims;
use serde_json::json;

fn token_with(app: &TestApp, secret: &str, exp_offset: i64, roles: &[&str]) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: app.admin_id.to_string(),
        name: None,
        email: None,
        roles: roles.iter().map(|r| r.to_string()).collect(),
        jti: "test".into(),
        iat: now,
        exp: now + exp_offset,
        nbf: now,
        iss: app.state.config.auth_issuer.clone(),
        aud: app.state.config.auth_audience.clone(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn missing_token_is_unauthenticated() {
    let app = TestApp::new().await;
    let response = app
        .request(Method::GET, &format!("{}/repair-request/", API), None, None)
        .await;

    assert_eq!(response.status(), 401);
    assert_eq!(
        response_json(response).await,
        json!({ "status": 401, "message": "Unauthenticated.", "errors": {} })
    );
}

#[tokio::test]
async fn garbage_and_foreign_tokens_are_unauthenticated() {
    let app = TestApp::new().await;
    let uri = format!("{}/repair-request/", API);

    let response = app.request(Method::GET, &uri, None, Some("not-a-jwt")).await;
    assert_eq!(response.status(), 401);

    let foreign = token_with(&app, "another-secret-that-is-also-long-enough", 3600, &["ADMIN"]);
    let response = app.request(Method::GET, &uri, None, Some(&foreign)).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn expired_token_is_unauthenticated() {
    let app = TestApp::new().await;
    let secret = app.state.config.jwt_secret.clone();
    let expired = token_with(&app, &secret, -7200, &["ADMIN"]);

    let response = app
        .request(
            Method::GET,
            &format!("{}/repair-request/", API),
            None,
            Some(&expired),
        )
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn user_without_admin_role_cannot_create() {
    let app = TestApp::new().await;
    let response = app
        .as_user(
            Method::POST,
            &format!("{}/repair-request/", API),
            Some(valid_repair_request()),
        )
        .await;

    assert_eq!(response.status(), 403);
    assert_eq!(
        response_json(response).await,
        json!({
            "status": 403,
            "message": "User does not have the right roles.",
            "errors": {}
        })
    );
    assert_eq!(app.stored_repair_requests().await, 0);
}

#[tokio::test]
async fn role_gate_runs_before_record_lookup() {
    let app = TestApp::new().await;
    let record = app.create_repair_request(valid_repair_request()).await;
    let id = record["id"].as_i64().unwrap();

    for path in [format!("{}/repair-request/{}", API, id), format!("{}/repair-request/424242", API)] {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let response = app.as_user(method.clone(), &path, Some(json!({}))).await;
            assert_eq!(response.status(), 403, "{} {}", method, path);
        }
    }

    // untouched
    let current = response_json(
        app.as_admin(Method::GET, &format!("{}/repair-request/{}", API, id), None)
            .await,
    )
    .await;
    assert_eq!(current["data"]["repairRequest"], record);
}

#[tokio::test]
async fn categories_are_admin_only() {
    let app = TestApp::new().await;
    let response = app
        .as_user(Method::GET, &format!("{}/category/", API), None)
        .await;
    assert_eq!(response.status(), 403);

    let response = app
        .as_admin(Method::GET, &format!("{}/category/", API), None)
        .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn token_without_roles_is_forbidden_everywhere() {
    let app = TestApp::new().await;
    let secret = app.state.config.jwt_secret.clone();
    let roleless = token_with(&app, &secret, 3600, &[]);

    for resource in ["repair-request", "category", "support-request"] {
        let response = app
            .request(
                Method::GET,
                &format!("{}/{}/", API, resource),
                None,
                Some(&roleless),
            )
            .await;
        assert_eq!(response.status(), 403, "{}", resource);
    }
}

#[tokio::test]
async fn health_needs_no_token() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"]["database"], "up");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = TestApp::new().await;
    let response = app
        .request_with_headers(
            Method::GET,
            "/health",
            None,
            None,
            &[("x-request-id", "trace-me-123")],
        )
        .await;

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me-123"
    );
}
