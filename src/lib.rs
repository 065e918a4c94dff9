//! Wallet Session Core
//!
//! Session-facing coordinator for a wallet home screen: aggregates
//! heterogeneous balance data into a single displayable asset list, routes
//! inbound deep-link payloads to the destination resolver, and enforces an
//! inactivity auto-lock policy while the app is backgrounded.

// Public modules - these are the API surface
pub mod aggregator;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lock;
pub mod models;
pub mod providers;
pub mod router;
pub mod session;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use aggregator::aggregate;
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use handlers::{CompositeLockSink, ConsoleLockSink, LoggingResolver};
pub use lock::LockCoordinator;
pub use models::{
    Account, AssetKind, DisplayAsset, LinkEvent, LinkPayload, LockState, RouteResult, Token,
};
pub use providers::{LifecycleChannel, MemoryStateSource};
pub use router::DeepLinkRouter;
pub use session::WalletSession;
pub use traits::{
    DestinationResolver, LifecycleEvent, LifecycleSource, LockSink, WalletSnapshot,
    WalletStateSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
