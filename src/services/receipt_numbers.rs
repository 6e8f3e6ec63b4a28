use sea_orm::{
    sea_query::{Expr, OnConflict},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, instrument};

use crate::{errors::ServiceError, models::receipt_sequence};

pub const RECEIPT_PREFIX: &str = "RR-";
pub const REPAIR_REQUEST_SEQUENCE: &str = "repair_requests";

/// `RR-` followed by the value zero-padded to 12 digits.
pub fn format_receipt_number(value: i64) -> String {
    format!("{}{:012}", RECEIPT_PREFIX, value)
}

/// Draws receipt numbers from a persisted counter.
///
/// Every call commits its own increment, so a drawn value is never handed out
/// twice even when the insert that wanted it fails afterwards.
#[derive(Debug, Clone)]
pub struct ReceiptNumberGenerator {
    sequence: &'static str,
}

impl Default for ReceiptNumberGenerator {
    fn default() -> Self {
        Self::new(REPAIR_REQUEST_SEQUENCE)
    }
}

impl ReceiptNumberGenerator {
    pub fn new(sequence: &'static str) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &'static str {
        self.sequence
    }

    /// Increments the counter and returns the formatted receipt number.
    #[instrument(skip(self, db), fields(sequence = self.sequence))]
    pub async fn next(&self, db: &DatabaseConnection) -> Result<String, ServiceError> {
        let value = self.next_value(db).await?;
        debug!(value, "drew receipt sequence value");
        Ok(format_receipt_number(value))
    }

    async fn next_value(&self, db: &DatabaseConnection) -> Result<i64, ServiceError> {
        let txn = db.begin().await?;

        let seed = receipt_sequence::ActiveModel {
            name: Set(self.sequence.to_string()),
            value: Set(0),
        };
        receipt_sequence::Entity::insert(seed)
            .on_conflict(
                OnConflict::column(receipt_sequence::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        receipt_sequence::Entity::update_many()
            .col_expr(receipt_sequence::Column::Value, Expr::cust("value + 1"))
            .filter(receipt_sequence::Column::Name.eq(self.sequence))
            .exec(&txn)
            .await?;

        let row = receipt_sequence::Entity::find_by_id(self.sequence.to_string())
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!("receipt sequence {} missing", self.sequence))
            })?;

        txn.commit().await?;
        Ok(row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection_with_config, run_migrations, DbConfig};
    use rstest::rstest;

    #[rstest]
    #[case(1, "RR-000000000001")]
    #[case(42, "RR-000000000042")]
    #[case(999_999_999_999, "RR-999999999999")]
    fn formats_with_twelve_digits(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(format_receipt_number(value), expected);
    }

    async fn migrated_db() -> DatabaseConnection {
        let db = establish_connection_with_config(&DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        run_migrations(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn counter_starts_at_one_and_increments() {
        let db = migrated_db().await;
        let generator = ReceiptNumberGenerator::default();

        assert_eq!(generator.next(&db).await.unwrap(), "RR-000000000001");
        assert_eq!(generator.next(&db).await.unwrap(), "RR-000000000002");
        assert_eq!(generator.next(&db).await.unwrap(), "RR-000000000003");
    }

    #[tokio::test]
    async fn sequences_are_independent() {
        let db = migrated_db().await;
        let repairs = ReceiptNumberGenerator::default();
        let other = ReceiptNumberGenerator::new("other");

        repairs.next(&db).await.unwrap();
        repairs.next(&db).await.unwrap();
        assert_eq!(other.next(&db).await.unwrap(), "RR-000000000001");
    }
}
