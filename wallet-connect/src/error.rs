//! # Error Types
//!
//! Every fault in the wallet session is contained where it happens; these types
//! exist so the containment points can log something meaningful and so tests
//! can assert on the cause.
//!
//! ## Error Categories
//!
//! - [`ConfigError`]: URL/query configuration rejected by [`crate::config::SessionConfig::validate`]
//! - [`BridgeError`]: mobile wallet bridge registration failed or never settled
//! - [`AdapterError`]: a wallet adapter factory refused to construct its adapter
//! - [`ConnectError`]: a user-initiated connect/disconnect failed
//!
//! Only [`ConnectError`] ever reaches the UI. The other three degrade the
//! session silently (see [`crate::session`]).

use shared::identity::IdentityError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Endpoint override must be an http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid bridge timeout '{0}': expected a positive number of milliseconds")]
    InvalidTimeout(String),

    #[error("Invalid boolean for '{key}': {value}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("App name must not be blank")]
    BlankAppName,

    #[error("Chain identifier '{0}' is not a solana: chain")]
    InvalidChain(String),

    #[error("At least one chain must be advertised")]
    NoChains,
}

/// Why a mobile bridge registration ended in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The bridge reports a previous registration in this page.
    #[error("Mobile wallet bridge already registered")]
    AlreadyRegistered,

    /// The bridge module is not present in the page.
    #[error("Mobile wallet bridge unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid app identity: {0}")]
    InvalidIdentity(#[from] IdentityError),

    /// The configured registration deadline elapsed first.
    #[error("Mobile wallet bridge registration timed out after {0} ms")]
    TimedOut(u32),

    #[error("Mobile wallet bridge registration rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to construct {adapter} adapter: {reason}")]
pub struct AdapterError {
    pub adapter: String,
    pub reason: String,
}

impl AdapterError {
    pub fn new(adapter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("{0} wallet not found. Install the extension or open this page in a wallet browser.")]
    NotInstalled(String),

    #[error("Connection request rejected: {0}")]
    Rejected(String),

    #[error("Wallet returned an invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Wallet adapter '{0}' is not available in this session")]
    UnknownAdapter(String),

    #[error("Wallet APIs are only available in the browser")]
    Unsupported,
}
