use crate::errors::CoreError;

/// Compound growth: `principal * (1 + annual_rate_percent / 100) ^ periods`.
///
/// One compounding per period. `periods == 0` returns the principal.
#[must_use]
pub fn project(principal: f64, annual_rate_percent: f64, periods: u32) -> f64 {
    let growth = 1.0 + annual_rate_percent / 100.0;
    principal * growth.powf(f64::from(periods))
}

/// Single-period growth, used for challenges.
#[must_use]
pub fn one_period_value(principal: f64, annual_rate_percent: f64) -> f64 {
    project(principal, annual_rate_percent, 1)
}

/// Gain over the principal after `periods`.
#[must_use]
pub fn projected_gain(principal: f64, annual_rate_percent: f64, periods: u32) -> f64 {
    project(principal, annual_rate_percent, periods) - principal
}

/// JSON cannot carry infinities, so an overflowing projection is refused
/// before it reaches a record.
pub(crate) fn finite_projection(value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::invalid(
            "Projected value is too large. Try a smaller amount or fewer years.",
        ))
    }
}
