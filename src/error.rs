use thiserror::Error;

/// Result type alias for the session core
pub type Result<T> = std::result::Result<T, SessionError>;

/// Error taxonomy for the wallet session core
#[derive(Error, Debug)]
pub enum SessionError {
    /// A balance value could not be parsed during aggregation. Fails fast,
    /// no partial asset list is produced.
    #[error("invalid amount '{0}': unparseable balance")]
    InvalidAmount(String),

    /// The extracted deep link was empty or malformed. Non-fatal, logged.
    #[error("invalid link payload: {0}")]
    InvalidLinkPayload(String),

    /// The upstream link transport reported a delivery error. Non-fatal, logged.
    #[error("deep link delivery failed: {0}")]
    LinkDeliveryFailed(String),

    /// A configuration value was rejected at parse time. The previous valid
    /// configuration is retained.
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    /// The lock sink failed while presenting the lock screen. The session
    /// stays locked regardless.
    #[error("lock sink invocation failed: {0:#}")]
    LockSinkFailure(anyhow::Error),
}
