use async_trait::async_trait;
use axum::{extract::State, routing::get, Router};

use super::common::{respond_empty, respond_with, ApiResult, Bound, Payload, RouteBinding};
use crate::{
    auth::AuthUser, errors::ServiceError, models::support_request, services::SupportRequestInput,
    AppState,
};

#[async_trait]
impl RouteBinding for support_request::Model {
    const RESOURCE: &'static str = "support_request";

    async fn resolve(state: &AppState, id: i32) -> Result<Option<Self>, ServiceError> {
        state.services.support_requests.find_active(id).await
    }
}

pub fn support_request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/support-request",
            get(list_support_requests).post(create_support_request),
        )
        .route(
            "/support-request/",
            get(list_support_requests).post(create_support_request),
        )
        .route(
            "/support-request/:id",
            get(get_support_request)
                .put(update_support_request)
                .patch(update_support_request)
                .delete(delete_support_request),
        )
}

pub async fn list_support_requests(State(state): State<AppState>) -> ApiResult {
    let rows = state.services.support_requests.list().await?;
    respond_with(
        "messages.support_request.retrieved_list",
        "supportRequests",
        &rows,
    )
}

/// The owner is always the caller.
pub async fn create_support_request(
    State(state): State<AppState>,
    user: AuthUser,
    Payload(payload): Payload,
) -> ApiResult {
    let input = SupportRequestInput::validate_create(&payload)?;
    let created = state
        .services
        .support_requests
        .create(user.user_id, input)
        .await?;
    respond_with("messages.support_request.created", "supportRequest", &created)
}

pub async fn get_support_request(
    Bound(support_request): Bound<support_request::Model>,
) -> ApiResult {
    respond_with(
        "messages.support_request.retrieved",
        "supportRequest",
        &support_request,
    )
}

pub async fn update_support_request(
    State(state): State<AppState>,
    Bound(existing): Bound<support_request::Model>,
    Payload(payload): Payload,
) -> ApiResult {
    let input = SupportRequestInput::validate_update(&payload)?;
    let updated = state
        .services
        .support_requests
        .update(existing, input)
        .await?;
    respond_with("messages.support_request.updated", "supportRequest", &updated)
}

pub async fn delete_support_request(
    State(state): State<AppState>,
    Bound(existing): Bound<support_request::Model>,
) -> ApiResult {
    state.services.support_requests.delete(existing).await?;
    respond_empty("messages.support_request.deleted")
}
