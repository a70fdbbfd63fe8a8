//! Application constants

use shared::network::Network;

pub const DEFAULT_NETWORK: Network = Network::Devnet;

pub const DEFAULT_APP_NAME: &str = "Solana dApp";

// Used for the app identity when the page origin cannot be read
pub const FALLBACK_APP_ORIGIN: &str = "http://localhost:8080";

/// Opened by the mobile adapter when no wallet app answers on the device.
pub const WALLET_DIRECTORY_URL: &str = "https://solana.com/ecosystem/explore?categories=wallet";

/// localStorage key holding the name of the last connected adapter.
pub const LAST_WALLET_STORAGE_KEY: &str = "walletName";

// Query parameter names read by SessionConfig::from_query
pub const QUERY_NETWORK: &str = "network";
pub const QUERY_ENDPOINT: &str = "endpoint";
pub const QUERY_BRIDGE_TIMEOUT: &str = "bridge_timeout_ms";
pub const QUERY_MOBILE_MODULE: &str = "mobile_module";
pub const QUERY_AUTO_CONNECT: &str = "auto_connect";
pub const QUERY_LOG_LEVEL: &str = "log";
