//! # dApp Identity
//!
//! The identity a wallet shows the user when the dApp asks for authorization.
//! Serialized as-is into the JavaScript object the mobile wallet bridge expects
//! (`{ name, uri, icon }`).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    /// Display name shown in the wallet's authorization prompt
    pub name: String,
    /// Origin URI of the dApp
    pub uri: String,
    /// Absolute URL of the dApp icon
    pub icon: String,
}

impl AppIdentity {
    /// Build an identity for a page served from `origin`.
    ///
    /// The icon is expected at `<origin>/icon.png`.
    ///
    /// ```rust
    /// use shared::identity::AppIdentity;
    ///
    /// let identity = AppIdentity::for_origin("Solana dApp", "https://dapp.example.com/");
    /// assert_eq!(identity.uri, "https://dapp.example.com");
    /// assert_eq!(identity.icon, "https://dapp.example.com/icon.png");
    /// ```
    pub fn for_origin(name: impl Into<String>, origin: &str) -> Self {
        let origin = origin.trim().trim_end_matches('/');
        Self {
            name: name.into(),
            uri: origin.to_string(),
            icon: format!("{}/icon.png", origin),
        }
    }

    /// Reject identities the bridge would refuse anyway.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if self.name.trim().is_empty() {
            return Err(IdentityError::BlankName);
        }
        if !is_http_url(&self.uri) {
            return Err(IdentityError::InvalidUri(self.uri.clone()));
        }
        if !is_http_url(&self.icon) {
            return Err(IdentityError::InvalidIcon(self.icon.clone()));
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    BlankName,
    InvalidUri(String),
    InvalidIcon(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::BlankName => write!(f, "app identity name is blank"),
            IdentityError::InvalidUri(uri) => write!(f, "app identity uri is not an http(s) URL: '{}'", uri),
            IdentityError::InvalidIcon(icon) => write!(f, "app identity icon is not an http(s) URL: '{}'", icon),
        }
    }
}

impl std::error::Error for IdentityError {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin_strips_trailing_slash() {
        let identity = AppIdentity::for_origin("dApp", "http://localhost:8080/");
        assert_eq!(identity.uri, "http://localhost:8080");
        assert_eq!(identity.icon, "http://localhost:8080/icon.png");
        assert!(identity.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let identity = AppIdentity::for_origin("  ", "https://dapp.example.com");
        assert_eq!(identity.validate(), Err(IdentityError::BlankName));
    }

    #[test]
    fn test_validate_rejects_non_http_origin() {
        let identity = AppIdentity::for_origin("dApp", "file://");
        assert!(matches!(identity.validate(), Err(IdentityError::InvalidUri(_))));

        let identity = AppIdentity::for_origin("dApp", "null");
        assert!(matches!(identity.validate(), Err(IdentityError::InvalidUri(_))));
    }

    #[test]
    fn test_serializes_to_bridge_shape() {
        let identity = AppIdentity::for_origin("dApp", "https://dapp.example.com");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["name"], "dApp");
        assert_eq!(json["uri"], "https://dapp.example.com");
        assert_eq!(json["icon"], "https://dapp.example.com/icon.png");
    }
}
