#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

use repairdesk_api::{
    app_router,
    auth::{user, user_role, Role},
    config::AppConfig,
    db, models, AppState,
};

pub const API: &str = "/api/v1";

/// Helper harness for spinning up an application backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    pub admin_id: i32,
    pub user_id: i32,
    admin_token: String,
    user_token: String,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Same as [`TestApp::new`] with a hook to adjust the configuration first.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "test_secret_key_for_testing_purposes_only_32chars".to_string(),
            3600,
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // One connection keeps every query on the same in-memory database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        adjust(&mut cfg);

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);

        let admin_id = seed_user(&state, "Ada", "ada@example.com", Role::Admin).await;
        let user_id = seed_user(&state, "Linus", "linus@example.com", Role::User).await;

        let admin_token = state
            .auth
            .issue_token_for_user(admin_id)
            .await
            .expect("admin token");
        let user_token = state
            .auth
            .issue_token_for_user(user_id)
            .await
            .expect("user token");

        Self {
            router: app_router(state.clone()),
            state,
            admin_id,
            user_id,
            admin_token,
            user_token,
        }
    }

    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    pub fn user_token(&self) -> &str {
        &self.user_token
    }

    /// Send a request against the router with an optional bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response {
        self.request_with_headers(method, uri, body, token, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> Response {
        let body = body
            .map(|json| serde_json::to_string(&json).expect("failed to serialize json request body"));
        self.send(method, uri, body, token, headers).await
    }

    /// Sends `raw` verbatim as a JSON body.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        raw: &str,
        token: Option<&str>,
    ) -> Response {
        self.send(method, uri, Some(raw.to_string()), token, &[]).await
    }

    pub async fn as_admin(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request(method, uri, body, Some(self.admin_token())).await
    }

    pub async fn as_user(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request(method, uri, body, Some(self.user_token())).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header("authorization", format!("Bearer {}", tok));
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = match body {
            Some(raw) => {
                builder = builder.header("content-type", "application/json");
                Body::from(raw)
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Stored repair requests, soft-deleted rows included.
    pub async fn stored_repair_requests(&self) -> u64 {
        models::repair_request::Entity::find()
            .count(&*self.state.db)
            .await
            .expect("count repair requests")
    }

    /// Creates a repair request through the API and returns its JSON.
    pub async fn create_repair_request(&self, payload: Value) -> Value {
        let response = self
            .as_admin(Method::POST, &format!("{}/repair-request/", API), Some(payload))
            .await;
        assert_eq!(response.status(), 200, "create should succeed");
        response_json(response).await["data"]["repairRequest"].clone()
    }
}

async fn seed_user(state: &AppState, name: &str, email: &str, role: Role) -> i32 {
    let now = models::now();
    let account = user::ActiveModel {
        name: Set(name.to_string()),
        last_name: Set(None),
        email: Set(email.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(&*state.db)
    .await
    .expect("seed user");

    user_role::ActiveModel {
        user_id: Set(account.id),
        role_name: Set(role.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&*state.db)
    .await
    .expect("seed user role");

    account.id
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

/// A complete, valid repair-request payload.
pub fn valid_repair_request() -> Value {
    json!({
        "customer_name": "Jane Doe",
        "customer_phone": "5551234567",
        "customer_email": "jane@example.com",
        "article_name": "Laptop",
        "article_type": "Computer",
        "article_brand": "Acme",
        "article_model": "X1 Carbon",
        "article_serialnumber": "SN-123456",
        "article_accesories": "Charger",
        "article_problem": "Does not boot",
        "repair_status": "PENDING",
        "repair_details": "Replace the power board",
        "repair_price": 1500.5,
        "received_at": "2023-10-01",
        "repaired_at": "2023-10-05"
    })
}

/// `valid_repair_request` with `field` replaced (or removed when `value` is `None`).
pub fn repair_request_with(field: &str, value: Option<Value>) -> Value {
    let mut payload = valid_repair_request();
    let object = payload.as_object_mut().expect("payload object");
    match value {
        Some(v) => {
            object.insert(field.to_string(), v);
        }
        None => {
            object.remove(field);
        }
    }
    payload
}
