use crate::domain::model::TaxRate;
use rust_decimal::Decimal;

/// Effective tax rate for an event: the override wins whenever one is present,
/// including a zero override meaning "no tax". Only an absent override falls
/// back to the global rate.
pub fn resolve(global: TaxRate, override_rate: Option<TaxRate>) -> TaxRate {
    override_rate.unwrap_or(global)
}

/// Interpret the raw stored metadata value. Absent, blank, non-numeric and
/// out-of-range values all read as "no override" so pricing never fails at
/// render time; `"0"` reads as a real zero-rate override.
pub fn parse_stored_override(raw: Option<&str>) -> Option<TaxRate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw
        .parse::<Decimal>()
        .ok()
        .and_then(|value| TaxRate::new(value).ok())
    {
        Some(rate) => Some(rate),
        None => {
            tracing::warn!(
                value = raw,
                "stored tax override is not a usable rate, using the global rate"
            );
            None
        }
    }
}
