use std::sync::Arc;

use async_trait::async_trait;

use crate::traits::LockSink;

/// Lock sink that fans the lock action out to multiple sinks.
///
/// Every sink is invoked even when an earlier one fails; the first failure
/// is reported afterwards.
pub struct CompositeLockSink {
    sinks: Vec<Arc<dyn LockSink>>,
}

impl CompositeLockSink {
    /// Create an empty composite lock sink
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink to the composite
    pub fn add_sink(&mut self, sink: Arc<dyn LockSink>) {
        self.sinks.push(sink);
    }

    /// Check if there are any sinks
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Number of sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for CompositeLockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LockSink for CompositeLockSink {
    async fn lock_wallet(&self) -> anyhow::Result<()> {
        let mut first_failure = None;
        for sink in &self.sinks {
            if let Err(e) = sink.lock_wallet().await {
                first_failure.get_or_insert(e);
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
