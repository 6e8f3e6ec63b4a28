//! RepairDesk API Library
//!
//! Administrative JSON API for repair requests, catalog categories and
//! support requests, with role-gated CRUD endpoints.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod services;
pub mod tracing;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::auth::{AuthRouterExt, AuthService, Role};
use crate::validation::FieldErrors;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub auth: Arc<AuthService>,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Wires services and auth around an established pool.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let auth = Arc::new(AuthService::new(
            auth::AuthConfig::from(&config),
            db.clone(),
        ));
        let services = handlers::AppServices::new(db.clone(), &config);
        Self {
            db,
            config,
            auth,
            services,
        }
    }
}

/// Response envelope shared by every endpoint.
///
/// `data` is omitted when absent; `errors` is only present on failures and
/// is `{}` when there are no field-level details.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = Value> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status.as_u16();
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Versioned API: every resource behind its role gate.
pub fn api_v1_routes() -> Router<AppState> {
    let repair_requests =
        handlers::repair_requests::repair_request_routes().with_role(Role::Admin);

    let categories = handlers::categories::category_routes().with_role(Role::Admin);

    let support_requests = handlers::support_requests::support_request_routes()
        .with_any_role(&[Role::Admin, Role::User]);

    Router::new()
        .merge(repair_requests)
        .merge(categories)
        .merge(support_requests)
}

/// Full application router with the shared middleware stack.
pub fn app_router(state: AppState) -> Router {
    let prefix = state.config.api_prefix().to_string();
    let default_locale = i18n::supported_locale(&state.config.locale).unwrap_or(i18n::DEFAULT_LOCALE);
    let auth_service = state.auth.clone();

    let api = if prefix.is_empty() {
        Router::new().merge(api_v1_routes())
    } else {
        Router::new().nest(&prefix, api_v1_routes())
    };

    Router::new()
        .merge(handlers::health::health_routes())
        .merge(api)
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Resolve the request locale before anything renders a message
        .layer(axum::middleware::from_fn_with_state(
            default_locale,
            i18n::locale_middleware,
        ))
        // Inject AuthService into request extensions for auth middleware
        .layer(axum::middleware::from_fn_with_state(
            auth_service,
            |axum::extract::State(auth): axum::extract::State<Arc<AuthService>>,
             mut req: axum::extract::Request,
             next: axum::middleware::Next| async move {
                req.extensions_mut().insert(auth);
                next.run(req).await
            },
        ))
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
