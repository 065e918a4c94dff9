use async_trait::async_trait;

/// Trait for the action invoked when the auto-lock timer fires,
/// e.g. presenting the lock screen
#[async_trait]
pub trait LockSink: Send + Sync {
    /// Re-lock the wallet session
    async fn lock_wallet(&self) -> anyhow::Result<()>;
}
