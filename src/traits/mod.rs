//! Capability seams consumed by the session core

pub mod destination_resolver;
pub mod lifecycle_source;
pub mod lock_sink;
pub mod state_source;

// Re-export for convenience
pub use destination_resolver::DestinationResolver;
pub use lifecycle_source::{LifecycleEvent, LifecycleSource};
pub use lock_sink::LockSink;
pub use state_source::{WalletSnapshot, WalletStateSource};
