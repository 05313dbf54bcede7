use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Decimal places kept by DECIMAL(19, 2) columns
pub const AMOUNT_SCALE: u32 = 2;

/// Integer digits kept by DECIMAL(19, 2) columns
const AMOUNT_INTEGER_DIGITS: u32 = 17;

/// Check that `amount` is storable in a DECIMAL(19, 2) column without rounding
///
/// Trailing zeros do not count towards the scale, so `1000.000` is accepted.
pub fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    let scale = amount.normalize().scale();
    if scale > AMOUNT_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places, got {}",
            field, AMOUNT_SCALE, scale
        )));
    }

    if amount.abs() >= max_exclusive() {
        return Err(AppError::validation(format!(
            "{} must be less than 10^{}",
            field, AMOUNT_INTEGER_DIGITS
        )));
    }

    Ok(())
}

fn max_exclusive() -> Decimal {
    Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS))
}
