use crate::domain::model::TaxRate;
use crate::utils::error::{ExtensionError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Tax rates are percentages; the admin input declares the same bounds.
pub fn validate_rate_range(field_name: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ExtensionError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "tax rate must be between 0 and 100".to_string(),
        });
    }
    Ok(())
}

/// Parse a non-empty submitted form value into a rate. The caller decides what
/// an absent or blank submission means; this only handles real input.
pub fn parse_rate_input(field_name: &str, raw: &str) -> Result<TaxRate> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<Decimal>()
        .map_err(|_| ExtensionError::ValidationError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "expected a number".to_string(),
        })?;
    validate_rate_range(field_name, value)?;
    TaxRate::new(value)
}
