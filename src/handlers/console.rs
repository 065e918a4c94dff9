use async_trait::async_trait;
use tracing::info;

use crate::traits::LockSink;

/// Lock sink that reports the transition to the log.
///
/// Stands in for a navigation push to the lock screen in demos and tests.
pub struct ConsoleLockSink;

impl ConsoleLockSink {
    /// Create a new console lock sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LockSink for ConsoleLockSink {
    async fn lock_wallet(&self) -> anyhow::Result<()> {
        info!("wallet locked after inactivity");
        Ok(())
    }
}
