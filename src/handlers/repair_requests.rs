use async_trait::async_trait;
use axum::{
    extract::State,
    routing::get,
    Router,
};

use super::common::{respond_empty, respond_with, ApiResult, Bound, Payload, RouteBinding};
use crate::{
    errors::ServiceError, models::repair_request, services::RepairRequestInput, AppState,
};

#[async_trait]
impl RouteBinding for repair_request::Model {
    const RESOURCE: &'static str = "repair_request";

    async fn resolve(state: &AppState, id: i32) -> Result<Option<Self>, ServiceError> {
        state.services.repair_requests.find_active(id).await
    }
}

/// Routes for repair requests; gating is applied by the caller.
pub fn repair_request_routes() -> Router<AppState> {
    Router::new()
        .route("/repair-request", get(list_repair_requests).post(create_repair_request))
        .route("/repair-request/", get(list_repair_requests).post(create_repair_request))
        .route(
            "/repair-request/:id",
            get(get_repair_request)
                .put(update_repair_request)
                .patch(update_repair_request)
                .delete(delete_repair_request),
        )
}

pub async fn list_repair_requests(State(state): State<AppState>) -> ApiResult {
    let rows = state.services.repair_requests.list().await?;
    respond_with(
        "messages.repair_request.retrieved_list",
        "repairRequests",
        &rows,
    )
}

pub async fn create_repair_request(
    State(state): State<AppState>,
    Payload(payload): Payload,
) -> ApiResult {
    let input = RepairRequestInput::validate_create(&payload)?;
    let created = state.services.repair_requests.create(input).await?;
    respond_with("messages.repair_request.created", "repairRequest", &created)
}

pub async fn get_repair_request(Bound(repair_request): Bound<repair_request::Model>) -> ApiResult {
    respond_with(
        "messages.repair_request.retrieved",
        "repairRequest",
        &repair_request,
    )
}

pub async fn update_repair_request(
    State(state): State<AppState>,
    Bound(existing): Bound<repair_request::Model>,
    Payload(payload): Payload,
) -> ApiResult {
    let input = RepairRequestInput::validate_update(&payload)?;
    let updated = state.services.repair_requests.update(existing, input).await?;
    respond_with("messages.repair_request.updated", "repairRequest", &updated)
}

pub async fn delete_repair_request(
    State(state): State<AppState>,
    Bound(existing): Bound<repair_request::Model>,
) -> ApiResult {
    state.services.repair_requests.delete(existing).await?;
    respond_empty("messages.repair_request.deleted")
}
