use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;
use tracing::warn;

use crate::{db, i18n::trans, ApiResponse, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDetails {
    pub database: ComponentStatus,
}

/// Unauthenticated health check; 503 while the database does not answer a ping.
pub async fn health_check(State(state): State<AppState>) -> ApiResponse {
    let database = match db::check_connection(&state.db).await {
        Ok(()) => ComponentStatus::Up,
        Err(e) => {
            warn!(error = %e, "health check: database unreachable");
            ComponentStatus::Down
        }
    };

    let details = HealthDetails { database };
    let data = match serde_json::to_value(&details) {
        Ok(value) => value,
        Err(_) => serde_json::json!({ "database": "down" }),
    };

    match database {
        ComponentStatus::Up => ApiResponse::success(trans("messages.health.ok"), data),
        ComponentStatus::Down => ApiResponse::success(trans("messages.health.degraded"), data)
            .with_status(StatusCode::SERVICE_UNAVAILABLE),
    }
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
