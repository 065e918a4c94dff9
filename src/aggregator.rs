//! Asset aggregation: merges the native-currency pseudo-asset with the
//! pre-valued token list into a single ordered display list.

use crate::error::Result;
use crate::models::{Account, DisplayAsset, Token, NATIVE_DECIMALS};
use crate::utils::{fiat_value, format_major_units, parse_base_units};

/// Build the unified display list for the home screen.
///
/// With a resolved account the native entry is computed from the
/// smallest-unit balance and prepended; tokens follow in their given order,
/// mapped 1:1 (they arrive pre-valued, no fiat math is done for them here).
/// Without a resolved account the token list passes through unchanged.
///
/// Pure function of its inputs: no I/O, inputs never mutated, a fresh
/// vector returned on every call. An unparseable account balance is an
/// `InvalidAmount` error and yields no partial result.
pub fn aggregate(
    account: Option<&Account>,
    tokens: &[Token],
    conversion_rate: f64,
    currency: &str,
) -> Result<Vec<DisplayAsset>> {
    let balance = match account.and_then(|a| a.balance.as_deref()) {
        Some(balance) => balance,
        None => return Ok(tokens.iter().map(DisplayAsset::from_token).collect()),
    };

    let units = parse_base_units(balance)?;
    let native = DisplayAsset::native(
        format_major_units(units, NATIVE_DECIMALS)?,
        fiat_value(units, NATIVE_DECIMALS, conversion_rate, currency)?,
    );

    let mut assets = Vec::with_capacity(tokens.len() + 1);
    assets.push(native);
    assets.extend(tokens.iter().map(DisplayAsset::from_token));
    Ok(assets)
}
