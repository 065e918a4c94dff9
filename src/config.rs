//! Environment-backed configuration for the demo binary

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Result, SessionError};

/// Demo wallet address used when `WALLET_ADDRESS` is unset
pub const DEFAULT_WALLET_ADDRESS: &str = "0xe7a437a7a1b8c02d5bb41ba2a38374bbf71f055f";

/// Session configuration resolved from the environment.
///
/// Every value has a default; a present but unparseable value is an
/// `InvalidConfig` error so a typo never silently becomes a default.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub wallet_address: String,
    /// Native balance in smallest units (decimal or 0x hex)
    pub account_balance: String,
    /// Auto-lock timeout in milliseconds; `<= 0` disables auto-lock
    pub lock_timeout_ms: i64,
    pub currency: String,
    pub conversion_rate: f64,
}

impl SessionConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            wallet_address: env::var("WALLET_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_WALLET_ADDRESS.to_string()),
            account_balance: env::var("ACCOUNT_BALANCE")
                .unwrap_or_else(|_| "2000000000000000000".to_string()),
            lock_timeout_ms: parse_var("LOCK_TIMEOUT_MS", 30_000)?,
            currency: env::var("DISPLAY_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
            conversion_rate: parse_var("CONVERSION_RATE", 1800.0)?,
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Parse one configuration value, rejecting malformed input
fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| SessionError::InvalidConfig {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
