use std::sync::Mutex;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::traits::{LifecycleEvent, LifecycleSource};

/// Channel-backed lifecycle source fanning events out to every subscriber.
///
/// The host platform calls [`background`](Self::background) /
/// [`foreground`](Self::foreground) when the app transitions; subscribers
/// drop their receiver to unsubscribe and are pruned on the next emit.
pub struct LifecycleChannel {
    subscribers: Mutex<Vec<UnboundedSender<LifecycleEvent>>>,
}

impl LifecycleChannel {
    /// Create a lifecycle channel with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Emit a backgrounded signal
    pub fn background(&self) {
        self.emit(LifecycleEvent::Backgrounded);
    }

    /// Emit a foregrounded signal
    pub fn foreground(&self) {
        self.emit(LifecycleEvent::Foregrounded);
    }

    fn emit(&self, event: LifecycleEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|sender| sender.send(event).is_ok());
        debug!(?event, count = subscribers.len(), "lifecycle event emitted");
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl Default for LifecycleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleSource for LifecycleChannel {
    fn subscribe(&self) -> UnboundedReceiver<LifecycleEvent> {
        let (sender, receiver) = unbounded_channel();
        self.subscribers.lock().unwrap().push(sender);
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fans_out_to_every_subscriber() {
        let channel = LifecycleChannel::new();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        channel.background();

        assert_eq!(first.recv().await, Some(LifecycleEvent::Backgrounded));
        assert_eq!(second.recv().await, Some(LifecycleEvent::Backgrounded));
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned() {
        let channel = LifecycleChannel::new();
        let first = channel.subscribe();
        let mut second = channel.subscribe();
        drop(first);

        channel.foreground();

        assert_eq!(channel.subscriber_count(), 1);
        assert_eq!(second.recv().await, Some(LifecycleEvent::Foregrounded));
    }
}
