use async_trait::async_trait;
use tracing::info;

use crate::traits::DestinationResolver;

/// Destination resolver that logs the links it is handed.
///
/// Demo stand-in for the host app's navigation layer; rejects links without
/// a scheme separator so malformed input is visible in tests.
pub struct LoggingResolver;

impl LoggingResolver {
    /// Create a new logging resolver
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DestinationResolver for LoggingResolver {
    async fn parse(&self, raw_link: &str) -> anyhow::Result<()> {
        let (scheme, rest) = raw_link
            .split_once("://")
            .ok_or_else(|| anyhow::anyhow!("link '{raw_link}' has no scheme"))?;
        info!(scheme, destination = rest, "deep link resolved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_schemed_links() {
        assert!(LoggingResolver::new().parse("wallet://send").await.is_ok());
    }

    #[tokio::test]
    async fn rejects_schemeless_links() {
        assert!(LoggingResolver::new().parse("just-text").await.is_err());
    }
}
