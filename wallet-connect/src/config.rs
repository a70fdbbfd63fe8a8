//! # Session Configuration
//!
//! Everything the wallet session needs to know before it looks at the
//! environment. Defaults live in [`crate::utils::constants`]; a deployed page
//! can override them through query parameters:
//!
//! | parameter           | field                    | example                          |
//! |---------------------|--------------------------|----------------------------------|
//! | `network`           | `network`                | `mainnet`, `devnet`, `testnet`   |
//! | `endpoint`          | `endpoint_override`      | `https://rpc.example.com`        |
//! | `bridge_timeout_ms` | `bridge_timeout_ms`      | `10000`                          |
//! | `mobile_module`     | `mobile_adapter_module`  | `/vendor/mobile-adapter.js`      |
//! | `auto_connect`      | `auto_connect`           | `true` / `false`                 |
//! | `log`               | `log_level`              | `debug`                          |
//!
//! Configuration errors are never fatal: [`SessionConfig::from_query_or_default`]
//! logs the problem and falls back to defaults.

use std::collections::HashMap;

use shared::network::{Network, ALL_CHAINS};

use crate::error::ConfigError;
use crate::utils::constants::{
    DEFAULT_APP_NAME, DEFAULT_NETWORK, QUERY_AUTO_CONNECT, QUERY_BRIDGE_TIMEOUT, QUERY_ENDPOINT,
    QUERY_LOG_LEVEL, QUERY_MOBILE_MODULE, QUERY_NETWORK,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub network: Network,

    /// Explicit RPC URL; bypasses the network's public cluster URL
    pub endpoint_override: Option<String>,

    /// Name shown in the wallet's authorization prompt
    pub app_name: String,

    /// Chains advertised to the mobile wallet bridge
    pub chains: Vec<String>,

    /// Deadline for mobile bridge registration.
    ///
    /// `None` waits for the bridge indefinitely; while it is pending the wallet
    /// UI stays hidden.
    pub bridge_timeout_ms: Option<u32>,

    /// URL of an ES module exporting the richer mobile wallet adapter.
    /// When unset the adapter is looked up on `globalThis`.
    pub mobile_adapter_module: Option<String>,

    /// Reconnect the last used wallet once the session is ready
    pub auto_connect: bool,

    pub log_level: log::Level,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK,
            endpoint_override: None,
            app_name: DEFAULT_APP_NAME.to_string(),
            chains: ALL_CHAINS.iter().map(|chain| chain.to_string()).collect(),
            bridge_timeout_ms: None,
            mobile_adapter_module: None,
            auto_connect: true,
            log_level: log::Level::Info,
        }
    }
}

impl SessionConfig {
    /// Build a configuration from URL query parameters, starting from defaults.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(network) = param(params, QUERY_NETWORK) {
            config.network = network
                .parse()
                .map_err(|_| ConfigError::InvalidNetwork(network.to_string()))?;
        }

        config.endpoint_override = param(params, QUERY_ENDPOINT).map(str::to_string);

        if let Some(timeout) = param(params, QUERY_BRIDGE_TIMEOUT) {
            let ms = timeout
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidTimeout(timeout.to_string()))?;
            // 0 disables the deadline
            config.bridge_timeout_ms = (ms > 0).then_some(ms);
        }

        config.mobile_adapter_module = param(params, QUERY_MOBILE_MODULE).map(str::to_string);

        if let Some(flag) = param(params, QUERY_AUTO_CONNECT) {
            config.auto_connect = parse_flag(QUERY_AUTO_CONNECT, flag)?;
        }

        if let Some(level) = param(params, QUERY_LOG_LEVEL) {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Like [`SessionConfig::from_query`], but an invalid query yields the defaults.
    pub fn from_query_or_default(params: &HashMap<String, String>) -> Self {
        match Self::from_query(params) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid session configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::BlankAppName);
        }

        if let Some(endpoint) = &self.endpoint_override {
            if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }

        if self.chains.is_empty() {
            return Err(ConfigError::NoChains);
        }
        if let Some(chain) = self.chains.iter().find(|chain| !chain.starts_with("solana:")) {
            return Err(ConfigError::InvalidChain(chain.clone()));
        }

        if self.bridge_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }

        Ok(())
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
