//! Deep-link routing: validates inbound link payloads and hands extracted
//! links to the destination resolver.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::error::SessionError;
use crate::models::{LinkEvent, LinkPayload, RouteResult};
use crate::traits::DestinationResolver;

/// Stateless validator/dispatcher for inbound deep-link events
pub struct DeepLinkRouter {
    resolver: Arc<dyn DestinationResolver>,
}

impl DeepLinkRouter {
    /// Create a router around a destination resolver
    pub fn new(resolver: Arc<dyn DestinationResolver>) -> Self {
        Self { resolver }
    }

    /// Route one inbound payload.
    ///
    /// Delivery errors and malformed links are absorbed and logged; they must
    /// not bring down an active wallet session. The resolver is invoked at
    /// most once, and never with an empty link.
    pub async fn handle(&self, payload: LinkPayload) -> RouteResult {
        match LinkEvent::classify(payload) {
            LinkEvent::Failure(cause) => {
                error!("{}", SessionError::LinkDeliveryFailed(cause));
                RouteResult::NoRoute
            }
            LinkEvent::Other => {
                debug!("link event carried no routable destination");
                RouteResult::NoRoute
            }
            LinkEvent::NonCanonicalLink(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    warn!(
                        "{}",
                        SessionError::InvalidLinkPayload("empty link string".into())
                    );
                    return RouteResult::NoRoute;
                }
                match self.resolver.parse(raw).await {
                    Ok(()) => RouteResult::Dispatched,
                    Err(e) => {
                        error!("destination resolver rejected link: {e:#}");
                        RouteResult::NoRoute
                    }
                }
            }
        }
    }
}
