use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved params key carrying a raw non-canonical link string
pub const NON_CANONICAL_LINK_KEY: &str = "+non_branch_link";

/// Raw key/value mapping delivered with a deep-link activation event.
/// Consumed once; classified into a [`LinkEvent`] at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl LinkPayload {
    /// Payload reporting an upstream delivery error
    pub fn failure(cause: impl Into<String>) -> Self {
        Self {
            error: Some(cause.into()),
            params: Map::new(),
        }
    }

    /// Payload carrying a raw non-canonical link under the reserved key
    pub fn non_canonical_link(raw: impl Into<String>) -> Self {
        let mut params = Map::new();
        params.insert(
            NON_CANONICAL_LINK_KEY.to_string(),
            Value::String(raw.into()),
        );
        Self { error: None, params }
    }
}

/// Shape of an inbound link event, decided once when the payload arrives
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// Upstream delivery error; nothing to route
    Failure(String),
    /// A raw link string extracted from the reserved key
    NonCanonicalLink(String),
    /// Valid event with nothing to dispatch (e.g. attribution-only)
    Other,
}

impl LinkEvent {
    /// Classify a raw payload. A reserved-key value that is not a string is
    /// kept as an empty link so the router reports it as malformed.
    pub fn classify(payload: LinkPayload) -> Self {
        if let Some(cause) = payload.error {
            return LinkEvent::Failure(cause);
        }
        match payload.params.get(NON_CANONICAL_LINK_KEY) {
            Some(value) => {
                let raw = value.as_str().unwrap_or_default().to_string();
                LinkEvent::NonCanonicalLink(raw)
            }
            None => LinkEvent::Other,
        }
    }
}

/// Outcome of routing a deep-link payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResult {
    /// The destination resolver was handed the extracted link
    Dispatched,
    /// Nothing was dispatched
    NoRoute,
}
