use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Largest whole price the `decimal(12, 2)` column holds.
pub const MAX_REPAIR_PRICE: u64 = 9_999_999_999;

/// Repair request as stored in `repair_requests`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repair_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub receipt_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub article_name: String,
    pub article_type: String,
    pub article_brand: String,
    pub article_model: String,
    pub article_serialnumber: Option<String>,
    pub article_accesories: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub article_problem: String,
    pub repair_status: RepairStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub repair_details: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    #[serde(with = "super::price")]
    pub repair_price: Option<Decimal>,
    pub received_at: NaiveDate,
    pub repaired_at: Option<NaiveDate>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(
        with = "super::timestamp::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Rows that have not been soft-deleted.
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::DeletedAt.is_null())
    }
}

/// Repair workflow states, in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    VariantNames,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RepairStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "DONE")]
    Done,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl RepairStatus {
    /// Wire values accepted by validation.
    pub fn values() -> &'static [&'static str] {
        Self::VARIANTS
    }
}
