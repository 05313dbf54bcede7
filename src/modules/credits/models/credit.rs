// Credit entity
//
// A credit belongs to exactly one customer (`customer_id` is a non-owning
// back-reference) and is identified externally by a generated credit code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credit lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    /// Registered, awaiting analysis
    #[default]
    InProgress,
    Approved,
    Rejected,
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "in_progress"),
            CreditStatus::Approved => write!(f, "approved"),
            CreditStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(CreditStatus::InProgress),
            "approved" => Ok(CreditStatus::Approved),
            "rejected" => Ok(CreditStatus::Rejected),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    /// Assigned by storage on first insert
    pub id: Option<i64>,
    /// Immutable once generated
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl Credit {
    /// Build an unsaved credit with a fresh credit code and `InProgress` status.
    /// Business-rule validation happens in `CreditRules`.
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: i32,
        customer_id: i64,
    ) -> Self {
        Self {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value,
            day_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id,
        }
    }
}
