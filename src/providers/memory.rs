use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use dashmap::DashMap;

use crate::models::{Account, Token};
use crate::traits::{WalletSnapshot, WalletStateSource};

/// In-memory wallet state source.
///
/// Reference implementation for demos and tests; a real deployment adapts
/// its own store behind [`WalletStateSource`].
pub struct MemoryStateSource {
    accounts: DashMap<String, Account>,
    selected_address: RwLock<Option<String>>,
    tokens: RwLock<Vec<Token>>,
    conversion_rate: RwLock<f64>,
    currency: RwLock<String>,
    lock_timeout_ms: AtomicI64,
}

impl MemoryStateSource {
    /// Create an empty state source with a USD display currency
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            selected_address: RwLock::new(None),
            tokens: RwLock::new(Vec::new()),
            conversion_rate: RwLock::new(0.0),
            currency: RwLock::new("usd".to_string()),
            lock_timeout_ms: AtomicI64::new(0),
        }
    }

    /// Insert or replace an account and select its address
    pub fn put_account(&self, account: Account) {
        let address = account.address.clone();
        self.accounts.insert(address.clone(), account);
        *self.selected_address.write().unwrap() = Some(address);
    }

    pub fn set_selected_address(&self, address: Option<String>) {
        *self.selected_address.write().unwrap() = address;
    }

    pub fn set_tokens(&self, tokens: Vec<Token>) {
        *self.tokens.write().unwrap() = tokens;
    }

    pub fn set_conversion_rate(&self, rate: f64) {
        *self.conversion_rate.write().unwrap() = rate;
    }

    pub fn set_currency(&self, currency: impl Into<String>) {
        *self.currency.write().unwrap() = currency.into();
    }

    pub fn set_lock_timeout_ms(&self, timeout_ms: i64) {
        self.lock_timeout_ms.store(timeout_ms, Ordering::SeqCst);
    }
}

impl Default for MemoryStateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStateSource for MemoryStateSource {
    fn snapshot(&self) -> WalletSnapshot {
        let accounts: HashMap<String, Account> = self
            .accounts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        WalletSnapshot {
            accounts,
            selected_address: self.selected_address.read().unwrap().clone(),
            tokens: self.tokens.read().unwrap().clone(),
            conversion_rate: *self.conversion_rate.read().unwrap(),
            currency: self.currency.read().unwrap().clone(),
            lock_timeout_ms: self.lock_timeout_ms.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_updates() {
        let source = MemoryStateSource::new();
        source.put_account(Account::new("0xabc", "1000000000000000000"));
        source.set_tokens(vec![Token::new("0xdai", "DAI", "100")]);
        source.set_conversion_rate(1800.0);
        source.set_lock_timeout_ms(30_000);

        let snapshot = source.snapshot();
        assert_eq!(snapshot.selected_address.as_deref(), Some("0xabc"));
        assert!(snapshot.selected_account().unwrap().is_resolved());
        assert_eq!(snapshot.tokens.len(), 1);
        assert_eq!(snapshot.lock_timeout_ms, 30_000);
    }

    #[test]
    fn deselecting_hides_the_account() {
        let source = MemoryStateSource::new();
        source.put_account(Account::new("0xabc", "1"));
        source.set_selected_address(None);
        assert!(source.snapshot().selected_account().is_none());
    }
}
