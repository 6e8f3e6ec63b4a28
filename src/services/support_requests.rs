use std::sync::Arc;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    errors::ServiceError,
    models::{self, support_request},
    validation::{Rule, RuleSet, ValidatedInput},
};

lazy_static! {
    static ref CREATE_RULES: RuleSet = RuleSet::new()
        .field("date", "date", [Rule::Required, Rule::Date])
        .field("location", "location", [Rule::Required, Rule::String, Rule::Min(3)])
        .field("detail", "detail", [Rule::Required, Rule::String, Rule::Min(3)]);
    static ref UPDATE_RULES: RuleSet = CREATE_RULES.for_update();
}

/// Client-settable fields. The owner comes from the authenticated principal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportRequestInput {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub detail: Option<String>,
}

impl SupportRequestInput {
    pub fn validate_create(payload: &Value) -> Result<Self, ServiceError> {
        Ok(CREATE_RULES.validate(payload)?.into())
    }

    pub fn validate_update(payload: &Value) -> Result<Self, ServiceError> {
        Ok(UPDATE_RULES.validate(payload)?.into())
    }

    pub fn apply(self, model: &mut support_request::ActiveModel) {
        if let Some(date) = self.date {
            model.date = Set(date);
        }
        if let Some(location) = self.location {
            model.location = Set(location);
        }
        if let Some(detail) = self.detail {
            model.detail = Set(detail);
        }
    }
}

impl From<ValidatedInput> for SupportRequestInput {
    fn from(input: ValidatedInput) -> Self {
        Self {
            date: input.date("date"),
            location: input.string("location"),
            detail: input.string("detail"),
        }
    }
}

#[derive(Clone)]
pub struct SupportRequestService {
    db_pool: Arc<DbPool>,
}

impl SupportRequestService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<support_request::Model>, ServiceError> {
        Ok(support_request::Entity::find_active()
            .order_by_desc(support_request::Column::Id)
            .all(&*self.db_pool)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn find_active(
        &self,
        id: i32,
    ) -> Result<Option<support_request::Model>, ServiceError> {
        Ok(support_request::Entity::find_active()
            .filter(support_request::Column::Id.eq(id))
            .one(&*self.db_pool)
            .await?)
    }

    /// Files a support request owned by `user_id`.
    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        user_id: i32,
        input: SupportRequestInput,
    ) -> Result<support_request::Model, ServiceError> {
        let now = models::now();
        let mut model = support_request::ActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        input.apply(&mut model);

        let created = model.insert(&*self.db_pool).await?;
        info!(id = created.id, user_id, "support request created");
        Ok(created)
    }

    #[instrument(skip(self, existing, input), fields(id = existing.id))]
    pub async fn update(
        &self,
        existing: support_request::Model,
        input: SupportRequestInput,
    ) -> Result<support_request::Model, ServiceError> {
        let mut model: support_request::ActiveModel = existing.into();
        input.apply(&mut model);
        model.updated_at = Set(models::now());
        Ok(model.update(&*self.db_pool).await?)
    }

    #[instrument(skip(self, existing), fields(id = existing.id))]
    pub async fn delete(&self, existing: support_request::Model) -> Result<(), ServiceError> {
        let now = models::now();
        let mut model: support_request::ActiveModel = existing.into();
        model.deleted_at = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&*self.db_pool).await?;
        info!("support request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn owner_is_not_read_from_payload() {
        let input = SupportRequestInput::validate_create(&json!({
            "user_id": 99,
            "date": "2024-02-01",
            "location": "Front desk",
            "detail": "Printer jammed"
        }))
        .unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(input.location.as_deref(), Some("Front desk"));
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let result = SupportRequestInput::validate_create(&json!({
            "date": "2024-02-01",
            "location": "   ",
            "detail": "Printer jammed"
        }));
        match result {
            Err(ServiceError::ValidationError(errors)) => {
                assert!(errors.contains("location"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
