use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::aggregator::aggregate;
use crate::error::Result;
use crate::lock::LockCoordinator;
use crate::models::{DisplayAsset, LinkPayload, RouteResult};
use crate::router::DeepLinkRouter;
use crate::traits::{
    DestinationResolver, LifecycleEvent, LifecycleSource, LockSink, WalletStateSource,
};

/// Composition root for one wallet home-screen session.
///
/// Wires the aggregator, deep-link router and lock coordinator to
/// constructor-injected capabilities and brackets the lifecycle subscription
/// with `start()`/`stop()`.
pub struct WalletSession {
    state: Arc<dyn WalletStateSource>,
    lifecycle: Arc<dyn LifecycleSource>,
    router: DeepLinkRouter,
    lock: Arc<LockCoordinator>,
    lifecycle_task: Mutex<Option<JoinHandle<()>>>,
    selected_asset: Mutex<Option<DisplayAsset>>,
}

impl WalletSession {
    /// Create a session. The lock timeout is taken from the state snapshot.
    pub fn new(
        state: Arc<dyn WalletStateSource>,
        lifecycle: Arc<dyn LifecycleSource>,
        resolver: Arc<dyn DestinationResolver>,
        lock_sink: Arc<dyn LockSink>,
    ) -> Self {
        let timeout_ms = state.snapshot().lock_timeout_ms;
        Self {
            state,
            lifecycle,
            router: DeepLinkRouter::new(resolver),
            lock: Arc::new(LockCoordinator::new(timeout_ms, lock_sink)),
            lifecycle_task: Mutex::new(None),
            selected_asset: Mutex::new(None),
        }
    }

    /// Subscribe to the lifecycle source and begin forwarding events to the
    /// lock coordinator. Calling `start()` again replaces the previous
    /// subscription.
    pub fn start(&self) {
        let mut events = self.lifecycle.subscribe();
        let lock = Arc::clone(&self.lock);
        let task = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    LifecycleEvent::Backgrounded => lock.on_background(),
                    LifecycleEvent::Foregrounded => lock.on_foreground(),
                }
            }
            debug!("lifecycle source closed");
        });

        if let Some(previous) = self.lifecycle_task.lock().unwrap().replace(task) {
            previous.abort();
        }
        info!("wallet session started");
    }

    /// Release the lifecycle subscription and dispose the lock coordinator.
    /// Idempotent; later lifecycle events can no longer lock the session.
    pub fn stop(&self) {
        if let Some(task) = self.lifecycle_task.lock().unwrap().take() {
            task.abort();
        }
        self.lock.dispose();
        info!("wallet session stopped");
    }

    /// Recompute the unified asset list from a fresh state snapshot
    pub fn display_assets(&self) -> Result<Vec<DisplayAsset>> {
        let snapshot = self.state.snapshot();
        aggregate(
            snapshot.selected_account(),
            &snapshot.tokens,
            snapshot.conversion_rate,
            &snapshot.currency,
        )
    }

    /// Route one inbound deep-link payload
    pub async fn handle_deep_link(&self, payload: LinkPayload) -> RouteResult {
        self.router.handle(payload).await
    }

    /// Re-read the configured lock timeout from the state source and apply it
    pub fn refresh_lock_timeout(&self) {
        self.lock.update_timeout(self.state.snapshot().lock_timeout_ms);
    }

    /// Apply a new lock timeout directly
    pub fn update_lock_timeout(&self, timeout_ms: i64) {
        self.lock.update_timeout(timeout_ms);
    }

    /// Access the lock coordinator (state inspection, unlock signaling)
    pub fn lock(&self) -> &LockCoordinator {
        &self.lock
    }

    /// An asset was selected for the modal presentation
    pub fn on_asset_selected(&self, asset: DisplayAsset) {
        *self.selected_asset.lock().unwrap() = Some(asset);
    }

    /// The asset modal was dismissed
    pub fn on_asset_dismissed(&self) {
        *self.selected_asset.lock().unwrap() = None;
    }

    /// Currently selected asset, if the modal is showing
    pub fn selected_asset(&self) -> Option<DisplayAsset> {
        self.selected_asset.lock().unwrap().clone()
    }
}

impl Drop for WalletSession {
    fn drop(&mut self) {
        self.stop();
    }
}
