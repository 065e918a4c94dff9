//! Data model for the wallet session core

pub mod account;
pub mod asset;
pub mod link;
pub mod lock;
pub mod token;

// Re-export for convenience
pub use account::Account;
pub use asset::{AssetKind, DisplayAsset, NATIVE_ASSET_NAME, NATIVE_ASSET_SYMBOL, NATIVE_DECIMALS};
pub use link::{LinkEvent, LinkPayload, RouteResult, NON_CANONICAL_LINK_KEY};
pub use lock::LockState;
pub use token::Token;
