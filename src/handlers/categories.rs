use async_trait::async_trait;
use axum::{extract::State, routing::get, Router};

use super::common::{respond_empty, respond_with, ApiResult, Bound, Payload, RouteBinding};
use crate::{errors::ServiceError, models::category, services::CategoryInput, AppState};

#[async_trait]
impl RouteBinding for category::Model {
    const RESOURCE: &'static str = "category";

    async fn resolve(state: &AppState, id: i32) -> Result<Option<Self>, ServiceError> {
        state.services.categories.find_active(id).await
    }
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/category", get(list_categories).post(create_category))
        .route("/category/", get(list_categories).post(create_category))
        .route(
            "/category/:id",
            get(get_category)
                .put(update_category)
                .patch(update_category)
                .delete(delete_category),
        )
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult {
    let rows = state.services.categories.list().await?;
    respond_with("messages.category.retrieved_list", "categories", &rows)
}

pub async fn create_category(State(state): State<AppState>, Payload(payload): Payload) -> ApiResult {
    let input = CategoryInput::validate_create(&payload)?;
    let created = state.services.categories.create(input).await?;
    respond_with("messages.category.created", "category", &created)
}

pub async fn get_category(Bound(category): Bound<category::Model>) -> ApiResult {
    respond_with("messages.category.retrieved", "category", &category)
}

pub async fn update_category(
    State(state): State<AppState>,
    Bound(existing): Bound<category::Model>,
    Payload(payload): Payload,
) -> ApiResult {
    let input = CategoryInput::validate_update(&payload)?;
    let updated = state.services.categories.update(existing, input).await?;
    respond_with("messages.category.updated", "category", &updated)
}

pub async fn delete_category(
    State(state): State<AppState>,
    Bound(existing): Bound<category::Model>,
) -> ApiResult {
    state.services.categories.delete(existing).await?;
    respond_empty("messages.category.deleted")
}
