use std::collections::HashMap;

use crate::models::{Account, Token};

/// Read-only snapshot of the externally owned wallet state
#[derive(Debug, Clone, Default)]
pub struct WalletSnapshot {
    /// Accounts keyed by address
    pub accounts: HashMap<String, Account>,
    /// Currently selected address, if any
    pub selected_address: Option<String>,
    /// User tokens in display order
    pub tokens: Vec<Token>,
    /// Native-to-fiat conversion rate
    pub conversion_rate: f64,
    /// Active fiat currency code
    pub currency: String,
    /// Configured auto-lock timeout in milliseconds; `<= 0` disables auto-lock
    pub lock_timeout_ms: i64,
}

impl WalletSnapshot {
    /// The account behind the selected address, if resolved
    pub fn selected_account(&self) -> Option<&Account> {
        self.selected_address
            .as_deref()
            .and_then(|address| self.accounts.get(address))
    }
}

/// Core trait for reading wallet state.
///
/// The session recomputes its outputs from a fresh snapshot on demand; it
/// never polls the source.
pub trait WalletStateSource: Send + Sync {
    /// Current state snapshot
    fn snapshot(&self) -> WalletSnapshot;
}
