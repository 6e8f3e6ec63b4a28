use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    db::DbPool,
    errors::ServiceError,
    models::{self, repair_request, RepairStatus},
    services::receipt_numbers::ReceiptNumberGenerator,
    validation::{Rule, RuleSet, ValidatedInput},
};

lazy_static! {
    static ref CREATE_RULES: RuleSet = build_rules();
    static ref UPDATE_RULES: RuleSet = CREATE_RULES.for_update();
}

fn build_rules() -> RuleSet {
    use Rule::*;

    RuleSet::new()
        .field("customer_name", "customer_name", [Required, String, Min(3)])
        .field("customer_phone", "phone", [Required, String, Min(8)])
        .field("customer_email", "email", [Required, String, Email])
        .field("article_name", "article_name", [Required, String, Min(3)])
        .field("article_type", "article_type", [Required, String, Min(3)])
        .field("article_brand", "article_brand", [Required, String, Min(2)])
        .field("article_model", "article_model", [Required, String, Min(2)])
        .field("article_serialnumber", "serialnumber", [Nullable, String, Min(6)])
        .field("article_accesories", "accesories", [Nullable, String, Min(3)])
        .field("article_problem", "article_problem", [Required, String, Min(3)])
        .field(
            "repair_status",
            "repair_status",
            [Required, String, Enum(RepairStatus::values())],
        )
        .field("repair_details", "repair_details", [Nullable, String, Min(3)])
        .field(
            "repair_price",
            "repair_price",
            [Nullable, Numeric, Decimals(2), Min(0), Max(repair_request::MAX_REPAIR_PRICE)],
        )
        .field("received_at", "received_at", [Required, Date])
        .field("repaired_at", "repaired_at", [Nullable, Date])
}

/// Rule chains for creating a repair request.
pub fn create_rules() -> &'static RuleSet {
    &CREATE_RULES
}

/// Rule chains for updates; absent fields are left untouched.
pub fn update_rules() -> &'static RuleSet {
    &UPDATE_RULES
}

/// Validated repair-request fields. `None` means "not sent";
/// `Some(None)` on a nullable field means "set to null".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepairRequestInput {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub article_name: Option<String>,
    pub article_type: Option<String>,
    pub article_brand: Option<String>,
    pub article_model: Option<String>,
    pub article_serialnumber: Option<Option<String>>,
    pub article_accesories: Option<Option<String>>,
    pub article_problem: Option<String>,
    pub repair_status: Option<RepairStatus>,
    pub repair_details: Option<Option<String>>,
    pub repair_price: Option<Option<Decimal>>,
    pub received_at: Option<NaiveDate>,
    pub repaired_at: Option<Option<NaiveDate>>,
}

impl RepairRequestInput {
    pub fn validate_create(payload: &Value) -> Result<Self, ServiceError> {
        Self::try_from(create_rules().validate(payload)?)
    }

    pub fn validate_update(payload: &Value) -> Result<Self, ServiceError> {
        Self::try_from(update_rules().validate(payload)?)
    }

    /// Copies every sent field onto the active model.
    pub fn apply(self, model: &mut repair_request::ActiveModel) {
        if let Some(v) = self.customer_name {
            model.customer_name = Set(v);
        }
        if let Some(v) = self.customer_phone {
            model.customer_phone = Set(v);
        }
        if let Some(v) = self.customer_email {
            model.customer_email = Set(v);
        }
        if let Some(v) = self.article_name {
            model.article_name = Set(v);
        }
        if let Some(v) = self.article_type {
            model.article_type = Set(v);
        }
        if let Some(v) = self.article_brand {
            model.article_brand = Set(v);
        }
        if let Some(v) = self.article_model {
            model.article_model = Set(v);
        }
        if let Some(v) = self.article_serialnumber {
            model.article_serialnumber = Set(v);
        }
        if let Some(v) = self.article_accesories {
            model.article_accesories = Set(v);
        }
        if let Some(v) = self.article_problem {
            model.article_problem = Set(v);
        }
        if let Some(v) = self.repair_status {
            model.repair_status = Set(v);
        }
        if let Some(v) = self.repair_details {
            model.repair_details = Set(v);
        }
        if let Some(v) = self.repair_price {
            model.repair_price = Set(v);
        }
        if let Some(v) = self.received_at {
            model.received_at = Set(v);
        }
        if let Some(v) = self.repaired_at {
            model.repaired_at = Set(v);
        }
    }
}

impl TryFrom<ValidatedInput> for RepairRequestInput {
    type Error = ServiceError;

    fn try_from(input: ValidatedInput) -> Result<Self, Self::Error> {
        let repair_status = input
            .string("repair_status")
            .map(|s| {
                RepairStatus::from_str(&s).map_err(|_| {
                    ServiceError::InternalError(format!("unvalidated repair status {}", s))
                })
            })
            .transpose()?;

        Ok(Self {
            customer_name: input.string("customer_name"),
            customer_phone: input.string("customer_phone"),
            customer_email: input.string("customer_email"),
            article_name: input.string("article_name"),
            article_type: input.string("article_type"),
            article_brand: input.string("article_brand"),
            article_model: input.string("article_model"),
            article_serialnumber: input.nullable_string("article_serialnumber"),
            article_accesories: input.nullable_string("article_accesories"),
            article_problem: input.string("article_problem"),
            repair_status,
            repair_details: input.nullable_string("repair_details"),
            repair_price: input.nullable_decimal("repair_price"),
            received_at: input.date("received_at"),
            repaired_at: input.nullable_date("repaired_at"),
        })
    }
}

/// Persistence for repair requests.
#[derive(Clone)]
pub struct RepairRequestService {
    db_pool: Arc<DbPool>,
    receipts: ReceiptNumberGenerator,
    max_receipt_attempts: u32,
}

impl RepairRequestService {
    pub fn new(db_pool: Arc<DbPool>, max_receipt_attempts: u32) -> Self {
        Self {
            db_pool,
            receipts: ReceiptNumberGenerator::default(),
            max_receipt_attempts: max_receipt_attempts.max(1),
        }
    }

    /// Non-deleted repair requests, newest id first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<repair_request::Model>, ServiceError> {
        let rows = repair_request::Entity::find_active()
            .order_by_desc(repair_request::Column::Id)
            .all(&*self.db_pool)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn find_active(&self, id: i32) -> Result<Option<repair_request::Model>, ServiceError> {
        let row = repair_request::Entity::find_active()
            .filter(repair_request::Column::Id.eq(id))
            .one(&*self.db_pool)
            .await?;
        Ok(row)
    }

    /// Inserts a new repair request under a freshly drawn receipt number.
    ///
    /// A unique violation on insert draws another number, up to the
    /// configured attempt count.
    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: RepairRequestInput,
    ) -> Result<repair_request::Model, ServiceError> {
        let now = models::now();
        let mut draft = repair_request::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        input.apply(&mut draft);

        for attempt in 1..=self.max_receipt_attempts {
            let receipt_number = self.receipts.next(&self.db_pool).await?;
            let mut candidate = draft.clone();
            candidate.receipt_number = Set(receipt_number.clone());

            match candidate.insert(&*self.db_pool).await {
                Ok(model) => {
                    info!(id = model.id, receipt_number = %model.receipt_number, "repair request created");
                    return Ok(model);
                }
                Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    warn!(attempt, %receipt_number, "receipt number collision, drawing another");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ServiceError::InternalError(format!(
            "no free receipt number after {} attempts",
            self.max_receipt_attempts
        )))
    }

    #[instrument(skip(self, existing, input), fields(id = existing.id))]
    pub async fn update(
        &self,
        existing: repair_request::Model,
        input: RepairRequestInput,
    ) -> Result<repair_request::Model, ServiceError> {
        let mut model: repair_request::ActiveModel = existing.into();
        input.apply(&mut model);
        model.updated_at = Set(models::now());

        let updated = model.update(&*self.db_pool).await?;
        info!("repair request updated");
        Ok(updated)
    }

    /// Soft delete; the row and its receipt number stay in storage.
    #[instrument(skip(self, existing), fields(id = existing.id))]
    pub async fn delete(&self, existing: repair_request::Model) -> Result<(), ServiceError> {
        let now = models::now();
        let mut model: repair_request::ActiveModel = existing.into();
        model.deleted_at = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&*self.db_pool).await?;
        info!("repair request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection_with_config, run_migrations, DbConfig};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "customer_name": "Jane Doe",
            "customer_phone": "5551234567",
            "customer_email": "jane@example.com",
            "article_name": "Laptop",
            "article_type": "Computer",
            "article_brand": "Acme",
            "article_model": "X1",
            "article_serialnumber": null,
            "article_accesories": "Charger",
            "article_problem": "Does not boot",
            "repair_status": "PENDING",
            "repair_details": null,
            "repair_price": "1500.50",
            "received_at": "2023-10-01",
            "repaired_at": null
        })
    }

    async fn service() -> RepairRequestService {
        let db = establish_connection_with_config(&DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        run_migrations(&db).await.unwrap();
        RepairRequestService::new(Arc::new(db), 5)
    }

    #[test]
    fn create_input_carries_every_field() {
        let input = RepairRequestInput::validate_create(&payload()).unwrap();
        assert_eq!(input.customer_name.as_deref(), Some("Jane Doe"));
        assert_eq!(input.repair_status, Some(RepairStatus::Pending));
        assert_eq!(input.article_serialnumber, Some(None));
        assert_eq!(input.repair_price, Some(Some(Decimal::new(150050, 2))));
        assert_eq!(
            input.received_at,
            NaiveDate::from_ymd_opt(2023, 10, 1)
        );
    }

    #[test]
    fn update_input_only_carries_sent_fields() {
        let input =
            RepairRequestInput::validate_update(&json!({ "repair_status": "DONE" })).unwrap();
        assert_eq!(input.repair_status, Some(RepairStatus::Done));
        assert_eq!(input.customer_name, None);
        assert_eq!(input.repaired_at, None);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let result = RepairRequestInput::validate_create(&json!({}));
        assert_matches!(result, Err(ServiceError::ValidationError(errors)) if errors.contains("customer_name") && errors.contains("received_at"));
    }

    #[tokio::test]
    async fn create_assigns_sequential_receipts() {
        let svc = service().await;
        let first = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();
        let second = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();

        assert_eq!(first.receipt_number, "RR-000000000001");
        assert_eq!(second.receipt_number, "RR-000000000002");
        assert_eq!(first.article_serialnumber, None);
    }

    #[tokio::test]
    async fn create_skips_numbers_already_taken() {
        let svc = service().await;
        let first = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();

        // Rewind the counter so the next draw collides with the stored row.
        receipt_sequence_rewind(&svc, 0).await;

        let second = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.receipt_number, "RR-000000000001");
        assert_eq!(second.receipt_number, "RR-000000000002");
    }

    async fn receipt_sequence_rewind(svc: &RepairRequestService, value: i64) {
        use crate::models::receipt_sequence;
        receipt_sequence::Entity::update_many()
            .col_expr(
                receipt_sequence::Column::Value,
                sea_orm::sea_query::Expr::value(value),
            )
            .exec(&*svc.db_pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_hides_row_from_lookups() {
        let svc = service().await;
        let created = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();
        let id = created.id;

        svc.delete(created).await.unwrap();

        assert!(svc.find_active(id).await.unwrap().is_none());
        assert!(svc.list().await.unwrap().is_empty());
        let stored = repair_request::Entity::find_by_id(id)
            .one(&*svc.db_pool)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.deleted_at.is_some());
    }

    #[tokio::test]
    async fn update_overwrites_only_sent_fields() {
        let svc = service().await;
        let created = svc
            .create(RepairRequestInput::validate_create(&payload()).unwrap())
            .await
            .unwrap();

        let input = RepairRequestInput::validate_update(&json!({
            "repair_status": "DONE",
            "repaired_at": "2023-10-05"
        }))
        .unwrap();
        let updated = svc.update(created.clone(), input).await.unwrap();

        assert_eq!(updated.repair_status, RepairStatus::Done);
        assert_eq!(updated.repaired_at, NaiveDate::from_ymd_opt(2023, 10, 5));
        assert_eq!(updated.customer_name, created.customer_name);
        assert_eq!(updated.receipt_number, created.receipt_number);
    }
}
