use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::CreditConfig;
use crate::core::amount::validate_amount;
use crate::core::error::AppError;

/// Business rules checked before a credit is registered
#[derive(Debug, Clone, Copy)]
pub struct CreditRules {
    config: CreditConfig,
}

impl CreditRules {
    pub fn new(config: CreditConfig) -> Self {
        Self { config }
    }

    /// Run every rule against a prospective credit
    pub fn validate(
        &self,
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: i32,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        self.validate_credit_value(credit_value)?;
        self.validate_number_of_installments(number_of_installments)?;
        self.validate_day_first_installment(day_first_installment, today)?;
        Ok(())
    }

    pub fn validate_credit_value(&self, credit_value: Decimal) -> Result<(), AppError> {
        if credit_value <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Credit value must be greater than zero".to_string(),
            ));
        }
        validate_amount("creditValue", credit_value)
    }

    pub fn validate_number_of_installments(&self, installments: i32) -> Result<(), AppError> {
        if installments < 1 || installments > self.config.max_installments {
            return Err(AppError::Validation(format!(
                "Number of installments must be between 1 and {}",
                self.config.max_installments
            )));
        }
        Ok(())
    }

    /// First installment must fall after today and within the configured month window
    pub fn validate_day_first_installment(
        &self,
        day: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        if day <= today {
            return Err(AppError::Validation(
                "First installment date must be in the future".to_string(),
            ));
        }

        let latest = self.latest_first_installment(today)?;
        if day > latest {
            return Err(AppError::Validation(format!(
                "First installment date must be on or before {}",
                latest
            )));
        }

        Ok(())
    }

    /// Last acceptable first-installment date for credits created on `today`
    pub fn latest_first_installment(&self, today: NaiveDate) -> Result<NaiveDate, AppError> {
        today
            .checked_add_months(Months::new(self.config.max_first_installment_months))
            .ok_or_else(|| AppError::internal("First installment window overflows calendar"))
    }
}

impl Default for CreditRules {
    fn default() -> Self {
        Self::new(CreditConfig::default())
    }
}
