//! # Solana Networks and Connection Endpoints
//!
//! Maps a [`Network`] to the three identifiers the wallet stack needs:
//!
//! - the cluster name passed to the mobile wallet adapter (`mainnet-beta`)
//! - the public RPC URL used as the default connection endpoint
//! - the Wallet Standard chain identifier advertised to the mobile bridge (`solana:mainnet`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::network::{ConnectionEndpoint, Network};
//!
//! let endpoint = ConnectionEndpoint::resolve(None, Network::Devnet);
//! assert_eq!(endpoint.as_str(), "https://api.devnet.solana.com");
//!
//! let custom = ConnectionEndpoint::resolve(Some("https://rpc.example.com"), Network::Devnet);
//! assert_eq!(custom.as_str(), "https://rpc.example.com");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chain identifiers advertised to the mobile wallet bridge, in advertisement order.
pub const ALL_CHAINS: [&str; 3] = ["solana:mainnet", "solana:devnet", "solana:testnet"];

/// A Solana cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Cluster name as understood by `@solana/web3.js` and the mobile wallet adapter.
    pub fn cluster(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet-beta",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    /// Public RPC endpoint for the cluster.
    pub fn cluster_api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
            Network::Testnet => "https://api.testnet.solana.com",
            Network::Devnet => "https://api.devnet.solana.com",
        }
    }

    /// Wallet Standard chain identifier.
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "solana:mainnet",
            Network::Testnet => "solana:testnet",
            Network::Devnet => "solana:devnet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cluster())
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

/// Returned when a string does not name a known cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Solana network '{}'", self.0)
    }
}

impl std::error::Error for ParseNetworkError {}

/// RPC URL the connection provider talks to.
///
/// Resolved once per session, either from an explicit override or from the
/// network's public cluster URL. There is no setter: a session that needs a
/// different endpoint builds a new one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEndpoint(String);

impl ConnectionEndpoint {
    /// Resolve the endpoint. A blank override is treated as absent.
    pub fn resolve(override_url: Option<&str>, network: Network) -> Self {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self(url.to_string()),
            None => Self(network.cluster_api_url().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
