// Customer entity with its embedded address
//
// A customer is identified by a surrogate id and deduplicated by CPF.
// Credits are owned by the customer but persisted in their own table;
// `credits` carries their codes in creation order.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::amount::validate_amount;
use crate::core::{AppError, Result};

/// Column widths of the customers table, in characters
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_ZIP_CODE_LEN: usize = 20;
pub const MAX_STREET_LEN: usize = 255;

/// Postal address embedded in a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

impl Address {
    pub fn new(zip_code: String, street: String) -> Result<Self> {
        let zip_code = required("zipCode", zip_code, MAX_ZIP_CODE_LEN)?;
        let street = required("street", street, MAX_STREET_LEN)?;
        Ok(Self { zip_code, street })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Assigned by storage on first insert
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Eleven digits, no punctuation
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    /// Argon2 hash once persisted
    pub password: String,
    pub address: Address,
    pub credits: Vec<Uuid>,
}

impl Customer {
    /// Create a new, not yet persisted customer with validation
    ///
    /// # Returns
    /// * `Result<Self>` - Customer with normalized CPF, or `Validation`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        cpf: String,
        email: String,
        income: Decimal,
        password: String,
        address: Address,
    ) -> Result<Self> {
        let first_name = required("firstName", first_name, MAX_NAME_LEN)?;
        let last_name = required("lastName", last_name, MAX_NAME_LEN)?;
        let cpf = Self::validate_cpf(&cpf)?;
        let email = Self::validate_email(email)?;
        Self::validate_income(income)?;
        if password.is_empty() {
            return Err(AppError::validation("password must not be empty"));
        }

        Ok(Self {
            id: None,
            first_name,
            last_name,
            cpf,
            email,
            income,
            password,
            address,
            credits: Vec::new(),
        })
    }

    /// Overwrite the mutable subset of fields: names, income and address
    pub fn apply_update(
        &mut self,
        first_name: String,
        last_name: String,
        income: Decimal,
        address: Address,
    ) -> Result<()> {
        let first_name = required("firstName", first_name, MAX_NAME_LEN)?;
        let last_name = required("lastName", last_name, MAX_NAME_LEN)?;
        Self::validate_income(income)?;

        self.first_name = first_name;
        self.last_name = last_name;
        self.income = income;
        self.address = address;
        Ok(())
    }

    /// Strip `.`/`-` formatting and verify both check digits
    pub fn validate_cpf(cpf: &str) -> Result<String> {
        let normalized: String = cpf.chars().filter(|c| *c != '.' && *c != '-').collect();
        if is_valid_cpf(&normalized) {
            Ok(normalized)
        } else {
            Err(AppError::validation(format!("Invalid CPF '{}'", cpf)))
        }
    }

    pub fn validate_email(email: String) -> Result<String> {
        let email = email.trim().to_string();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };

        if valid && email.chars().count() <= MAX_EMAIL_LEN {
            Ok(email)
        } else {
            Err(AppError::validation(format!("Invalid email '{}'", email)))
        }
    }

    pub fn validate_income(income: Decimal) -> Result<()> {
        if income < Decimal::ZERO {
            return Err(AppError::validation("income cannot be negative"));
        }
        validate_amount("income", income)
    }
}

/// CPF check: eleven digits, not all equal, two mod-11 check digits.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = match cpf.chars().map(|c| c.to_digit(10)).collect::<Option<_>>() {
        Some(digits) => digits,
        None => return false,
    };

    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Mod-11 check digit over `digits`, weights counting down to 2.
///
/// Applied to the first nine digits it yields the tenth, and to the first
/// ten it yields the eleventh.
pub fn cpf_check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        rem => 11 - rem,
    }
}

fn required(field: &str, value: String, max_len: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}
