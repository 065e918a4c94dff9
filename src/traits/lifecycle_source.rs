use tokio::sync::mpsc::UnboundedReceiver;

/// Application lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Backgrounded,
    Foregrounded,
}

/// Trait for sources emitting foreground/background signals
pub trait LifecycleSource: Send + Sync {
    /// Open a subscription to lifecycle events. The receiver is owned by the
    /// subscriber and dropped to release the subscription.
    fn subscribe(&self) -> UnboundedReceiver<LifecycleEvent>;
}
