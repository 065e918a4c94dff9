use serde::{Deserialize, Serialize};

/// The active wallet account as supplied by the external account store.
///
/// `balance` is the native-currency balance in smallest units, encoded as a
/// decimal or `0x`-prefixed hex integer string. `None` means the account has
/// not been resolved yet (the locked/loading condition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub name: Option<String>,
    pub balance: Option<String>,
}

impl Account {
    /// Create an account with a resolved balance
    pub fn new(address: impl Into<String>, balance: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
            balance: Some(balance.into()),
        }
    }

    /// Create an account whose balance has not been resolved yet
    pub fn unresolved(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
            balance: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether a balance is present for this account
    pub fn is_resolved(&self) -> bool {
        self.balance.is_some()
    }
}
