use serde::{Deserialize, Serialize};

use super::token::Token;

/// Display name of the native asset
pub const NATIVE_ASSET_NAME: &str = "Ether";
/// Ticker symbol of the native asset
pub const NATIVE_ASSET_SYMBOL: &str = "ETH";
/// Smallest-unit decimals of the native asset
pub const NATIVE_DECIMALS: u32 = 18;

/// Where a display asset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Native,
    Token,
}

/// Unified output record of the asset aggregator.
///
/// Ephemeral: recomputed on every relevant input change, never persisted.
/// When an account balance is present the list holds exactly one native-kind
/// entry, positioned first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAsset {
    pub name: String,
    pub symbol: String,
    pub balance: String,
    pub balance_fiat: Option<String>,
    pub kind: AssetKind,
}

impl DisplayAsset {
    /// Build the native pseudo-asset entry
    pub fn native(balance: impl Into<String>, balance_fiat: impl Into<String>) -> Self {
        Self {
            name: NATIVE_ASSET_NAME.to_string(),
            symbol: NATIVE_ASSET_SYMBOL.to_string(),
            balance: balance.into(),
            balance_fiat: Some(balance_fiat.into()),
            kind: AssetKind::Native,
        }
    }

    /// Map a pre-valued token 1:1 into a display asset
    pub fn from_token(token: &Token) -> Self {
        Self {
            name: token.name.clone().unwrap_or_else(|| token.symbol.clone()),
            symbol: token.symbol.clone(),
            balance: token.balance.clone(),
            balance_fiat: token.balance_fiat.clone(),
            kind: AssetKind::Token,
        }
    }

    pub fn is_native(&self) -> bool {
        self.kind == AssetKind::Native
    }
}
