//! # Shared Wallet Types
//!
//! Types that cross the boundary between the Rust front-end and the JavaScript
//! wallet libraries. Everything here serializes with `serde` so it can be handed
//! to `serde-wasm-bindgen` unchanged.
//!
//! ## Structure
//!
//! - **[`network`]**: Solana clusters, chain identifiers and the session's RPC endpoint
//! - **[`identity`]**: The dApp identity shown by wallets during authorization
//! - **[`utils`]**: Public key formatting and validation
//!
//! ## Usage
//!
//! ```rust
//! use shared::identity::AppIdentity;
//! use shared::network::{ConnectionEndpoint, Network};
//! use shared::utils::truncate_address;
//!
//! let identity = AppIdentity::for_origin("Solana dApp", "https://dapp.example.com");
//! let endpoint = ConnectionEndpoint::resolve(None, Network::Devnet);
//!
//! assert!(identity.validate().is_ok());
//! assert_eq!(endpoint.as_str(), "https://api.devnet.solana.com");
//! assert_eq!(truncate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Q...JKAL");
//! ```

pub mod identity;
pub mod network;
pub mod utils;

pub use identity::AppIdentity;
pub use network::{ConnectionEndpoint, Network};
pub use utils::*;
