// CreditRepository: persistence for credits
//
// Implements:
// - Insert with credit code uniqueness enforced by uk_credits_credit_code
// - Point lookup by credit code
// - List by owning customer id, in creation order

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditStatus};

/// Storage capability the credit service is built against
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert a new credit and return it with its generated id
    async fn insert(&self, credit: &Credit) -> Result<Credit>;

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;

    /// All credits owned by a customer; empty when it owns none
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>>;
}

/// MySQL-backed credit repository
#[derive(Clone)]
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn insert(&self, credit: &Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, status, customer_id
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.to_string())
        .bind(credit.customer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(
                e,
                format!(
                    "Credit {} conflicts with an existing credit or unknown customer {}",
                    credit.credit_code, credit.customer_id
                ),
            )
        })?;

        let mut created = credit.clone();
        created.id = Some(result.last_insert_id() as i64);
        Ok(created)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CreditRow::into_credit).transpose()
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE customer_id = ?
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CreditRow::into_credit).collect()
    }
}

// Helper struct for database mapping

#[derive(Debug, FromRow)]
struct CreditRow {
    id: i64,
    credit_code: String,
    credit_value: Decimal,
    day_first_installment: NaiveDate,
    number_of_installments: i32,
    status: String,
    customer_id: i64,
}

impl CreditRow {
    fn into_credit(self) -> Result<Credit> {
        let credit_code = Uuid::parse_str(&self.credit_code)
            .map_err(|e| AppError::Internal(format!("Invalid credit code in database: {}", e)))?;
        let status: CreditStatus = self
            .status
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid status in database: {}", e)))?;

        Ok(Credit {
            id: Some(self.id),
            credit_code,
            credit_value: self.credit_value,
            day_first_installment: self.day_first_installment,
            number_of_installments: self.number_of_installments,
            status,
            customer_id: self.customer_id,
        })
    }
}
