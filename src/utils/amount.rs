use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{Result, SessionError};

/// Parse a smallest-unit balance string. Accepts decimal digits or a
/// `0x`-prefixed hex integer.
pub fn parse_base_units(raw: &str) -> Result<u128> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidAmount(raw.to_string()));
    }

    let parsed = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u128::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u128>()
    };

    parsed.map_err(|_| SessionError::InvalidAmount(raw.to_string()))
}

/// Convert smallest units to a major-unit decimal value
fn to_major_units(units: u128, decimals: u32) -> Result<Decimal> {
    let signed = i128::try_from(units)
        .map_err(|_| SessionError::InvalidAmount(units.to_string()))?;
    Decimal::try_from_i128_with_scale(signed, decimals)
        .map_err(|_| SessionError::InvalidAmount(units.to_string()))
}

/// Render smallest units as a human-readable major-unit string with
/// trailing zeros trimmed ("2", "1.5")
pub fn format_major_units(units: u128, decimals: u32) -> Result<String> {
    Ok(to_major_units(units, decimals)?.normalize().to_string())
}

/// Render the fiat value of a smallest-unit balance: two decimal places
/// followed by the upper-cased currency code ("3600.00 USD")
pub fn fiat_value(units: u128, decimals: u32, rate: f64, currency: &str) -> Result<String> {
    let rate = Decimal::from_f64(rate)
        .ok_or_else(|| SessionError::InvalidAmount(format!("rate {rate}")))?;
    let mut value = to_major_units(units, decimals)?
        .checked_mul(rate)
        .ok_or_else(|| SessionError::InvalidAmount(units.to_string()))?
        .round_dp(2);
    value.rescale(2);
    Ok(format!("{} {}", value, currency.to_uppercase()))
}
