use serde::{Deserialize, Serialize};

/// A fungible token held by the account.
///
/// Tokens arrive pre-valued: `balance` and `balance_fiat` are display strings
/// already computed by the caller. `exchange_rate` is the optional per-token
/// fiat rate, carried through for the presentational layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub contract: String,
    pub symbol: String,
    pub name: Option<String>,
    pub balance: String,
    pub balance_fiat: Option<String>,
    pub exchange_rate: Option<f64>,
}

impl Token {
    /// Create a token with a display balance and no fiat valuation
    pub fn new(
        contract: impl Into<String>,
        symbol: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            contract: contract.into(),
            symbol: symbol.into(),
            name: None,
            balance: balance.into(),
            balance_fiat: None,
            exchange_rate: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_fiat(mut self, fiat: impl Into<String>) -> Self {
        self.balance_fiat = Some(fiat.into());
        self
    }

    pub fn with_exchange_rate(mut self, rate: f64) -> Self {
        self.exchange_rate = Some(rate);
        self
    }
}
