//! Session composition root

pub mod wallet_session;

pub use wallet_session::WalletSession;
