pub mod categories;
pub mod common;
pub mod health;
pub mod repair_requests;
pub mod support_requests;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{CategoryService, RepairRequestService, SupportRequestService},
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub repair_requests: Arc<RepairRequestService>,
    pub categories: Arc<CategoryService>,
    pub support_requests: Arc<SupportRequestService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, config: &AppConfig) -> Self {
        Self {
            repair_requests: Arc::new(RepairRequestService::new(
                db_pool.clone(),
                config.receipt_retry_attempts,
            )),
            categories: Arc::new(CategoryService::new(db_pool.clone())),
            support_requests: Arc::new(SupportRequestService::new(db_pool)),
        }
    }
}
