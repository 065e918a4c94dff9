use async_trait::async_trait;

/// Trait for turning a raw link string into an app navigation action.
///
/// The resolver's behavior is external to the session core; the router's
/// contract ends at invoking `parse` exactly once per extracted link.
#[async_trait]
pub trait DestinationResolver: Send + Sync {
    /// Resolve and act on a raw deep-link string
    async fn parse(&self, raw_link: &str) -> anyhow::Result<()>;
}
