use rust_decimal::Decimal;
use std::str::FromStr;

use super::catalog::FrameType;
use crate::error::ConfiguratorError;

const CM2_PER_SQM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Parse a dimension typed into an input box. Only strictly positive values
/// count; a comma is accepted as the decimal separator.
pub fn parse_dimension(field: &'static str, raw: &str) -> Result<Decimal, ConfiguratorError> {
    let trimmed = raw.trim();
    let invalid = || ConfiguratorError::InvalidDimension {
        field,
        value: trimmed.to_string(),
    };
    let value = Decimal::from_str(&trimmed.replace(',', ".")).map_err(|_| invalid())?;
    if value <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(value.normalize())
}

/// Area in m² of a width × height given in centimeters. `None` when the
/// product does not fit in a `Decimal`.
pub fn area_sqm(width_cm: Decimal, height_cm: Decimal) -> Option<Decimal> {
    width_cm.checked_mul(height_cm)?.checked_div(CM2_PER_SQM)
}

/// `area × unit price × quantity`, or `None` on overflow.
pub fn line_price(
    frame: &FrameType,
    has_glass: bool,
    width_cm: Decimal,
    height_cm: Decimal,
    quantity: u32,
) -> Option<Decimal> {
    area_sqm(width_cm, height_cm)?
        .checked_mul(frame.unit_price(has_glass))?
        .checked_mul(Decimal::from(quantity))
}
