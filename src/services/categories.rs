use std::sync::Arc;

use lazy_static::lazy_static;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    errors::ServiceError,
    models::{self, category},
    validation::{Rule, RuleSet, ValidatedInput},
};

lazy_static! {
    static ref CREATE_RULES: RuleSet = RuleSet::new()
        .field("name", "name", [Rule::Required, Rule::String, Rule::Min(3), Rule::Max(255)])
        .field("description", "description", [Rule::Nullable, Rule::String, Rule::Max(1000)]);
    static ref UPDATE_RULES: RuleSet = CREATE_RULES.for_update();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl CategoryInput {
    pub fn validate_create(payload: &Value) -> Result<Self, ServiceError> {
        Ok(CREATE_RULES.validate(payload)?.into())
    }

    pub fn validate_update(payload: &Value) -> Result<Self, ServiceError> {
        Ok(UPDATE_RULES.validate(payload)?.into())
    }

    pub fn apply(self, model: &mut category::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
    }
}

impl From<ValidatedInput> for CategoryInput {
    fn from(input: ValidatedInput) -> Self {
        Self {
            name: input.string("name"),
            description: input.nullable_string("description"),
        }
    }
}

#[derive(Clone)]
pub struct CategoryService {
    db_pool: Arc<DbPool>,
}

impl CategoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(category::Entity::find_active()
            .order_by_desc(category::Column::Id)
            .all(&*self.db_pool)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn find_active(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::Entity::find_active()
            .filter(category::Column::Id.eq(id))
            .one(&*self.db_pool)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        let now = models::now();
        let mut model = category::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        input.apply(&mut model);

        let created = model.insert(&*self.db_pool).await?;
        info!(id = created.id, "category created");
        Ok(created)
    }

    #[instrument(skip(self, existing, input), fields(id = existing.id))]
    pub async fn update(
        &self,
        existing: category::Model,
        input: CategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let mut model: category::ActiveModel = existing.into();
        input.apply(&mut model);
        model.updated_at = Set(models::now());
        Ok(model.update(&*self.db_pool).await?)
    }

    #[instrument(skip(self, existing), fields(id = existing.id))]
    pub async fn delete(&self, existing: category::Model) -> Result<(), ServiceError> {
        let now = models::now();
        let mut model: category::ActiveModel = existing.into();
        model.deleted_at = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&*self.db_pool).await?;
        info!("category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn name_is_bounded() {
        let long = "x".repeat(256);
        assert_matches!(
            CategoryInput::validate_create(&json!({ "name": long })),
            Err(ServiceError::ValidationError(errors)) if errors.contains("name")
        );
        assert_matches!(
            CategoryInput::validate_create(&json!({ "name": "TV" })),
            Err(ServiceError::ValidationError(errors)) if errors.contains("name")
        );
    }

    #[test]
    fn description_is_optional() {
        let input = CategoryInput::validate_create(&json!({ "name": "Phones" })).unwrap();
        assert_eq!(input.name.as_deref(), Some("Phones"));
        assert_eq!(input.description, None);

        let input =
            CategoryInput::validate_create(&json!({ "name": "Phones", "description": null }))
                .unwrap();
        assert_eq!(input.description, Some(None));
    }
}
