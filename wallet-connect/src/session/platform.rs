//! # Platform Detection
//!
//! Classifies the runtime from its user-agent string. Only Android devices can
//! reach a wallet app through the Solana Mobile Wallet Adapter bridge; iOS and
//! desktop browsers use injected extension wallets.
//!
//! Detection never fails: an environment without a navigation context, or one
//! whose user-agent cannot be read, is [`Platform::Standard`].

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use super::environment::HostEnvironment;

/// What the wallet session cares about: can the mobile bridge be used here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    MobileBridgeCapable,
    Standard,
}

impl Platform {
    pub fn is_mobile_bridge_capable(&self) -> bool {
        matches!(self, Platform::MobileBridgeCapable)
    }
}

/// Device family, for display and for deriving the [`Platform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Android,
    Ios,
    Desktop,
}

impl DeviceKind {
    /// Classify a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        if user_agent.contains("android") {
            DeviceKind::Android
        } else if ["iphone", "ipad", "ipod"]
            .iter()
            .any(|needle| user_agent.contains(needle))
        {
            DeviceKind::Ios
        } else {
            DeviceKind::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceKind::Android | DeviceKind::Ios)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Android => "Android",
            DeviceKind::Ios => "iOS",
            DeviceKind::Desktop => "Desktop",
        }
    }
}

impl From<DeviceKind> for Platform {
    fn from(device: DeviceKind) -> Self {
        match device {
            DeviceKind::Android => Platform::MobileBridgeCapable,
            DeviceKind::Ios | DeviceKind::Desktop => Platform::Standard,
        }
    }
}

/// Session-scoped detector.
///
/// The first classification made against an interactive environment is
/// cached; non-interactive calls answer `Standard` without caching so that a
/// later client-side call still sees the real device.
#[derive(Debug, Default)]
pub struct PlatformDetector {
    detected: OnceCell<DeviceKind>,
}

impl PlatformDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detect(&self, env: &dyn HostEnvironment) -> Platform {
        self.detect_device(env).into()
    }

    pub fn detect_device(&self, env: &dyn HostEnvironment) -> DeviceKind {
        if let Some(device) = self.detected.get() {
            return *device;
        }
        if !env.is_interactive() {
            return DeviceKind::Desktop;
        }
        match env.user_agent() {
            Some(user_agent) => {
                let device = DeviceKind::from_user_agent(&user_agent);
                log::debug!("Detected {} device from user agent", device.label());
                *self.detected.get_or_init(|| device)
            }
            None => {
                log::debug!("User agent unavailable, assuming a standard platform");
                DeviceKind::Desktop
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::environment::{HeadlessHost, StaticHost};

    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Mobile Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

    #[test]
    fn test_classify_user_agents() {
        assert_eq!(DeviceKind::from_user_agent(ANDROID_UA), DeviceKind::Android);
        assert_eq!(DeviceKind::from_user_agent(IPHONE_UA), DeviceKind::Ios);
        assert_eq!(DeviceKind::from_user_agent("Mozilla/5.0 (iPad; CPU OS 17_5)"), DeviceKind::Ios);
        assert_eq!(DeviceKind::from_user_agent(DESKTOP_UA), DeviceKind::Desktop);
        assert_eq!(DeviceKind::from_user_agent("ANDROID"), DeviceKind::Android);
    }

    #[test]
    fn test_only_android_is_bridge_capable() {
        assert_eq!(Platform::from(DeviceKind::Android), Platform::MobileBridgeCapable);
        assert_eq!(Platform::from(DeviceKind::Ios), Platform::Standard);
        assert_eq!(Platform::from(DeviceKind::Desktop), Platform::Standard);
        assert!(DeviceKind::Ios.is_mobile());
    }

    #[test]
    fn test_headless_is_standard() {
        let detector = PlatformDetector::new();
        assert_eq!(detector.detect(&HeadlessHost), Platform::Standard);
    }

    #[test]
    fn test_unreadable_user_agent_is_standard() {
        let detector = PlatformDetector::new();
        let env = StaticHost {
            user_agent: None,
            origin: Some("https://dapp.example.com".to_string()),
        };
        assert_eq!(detector.detect(&env), Platform::Standard);
    }

    #[test]
    fn test_headless_result_is_not_cached() {
        let detector = PlatformDetector::new();
        assert_eq!(detector.detect(&HeadlessHost), Platform::Standard);
        let android = StaticHost::new(ANDROID_UA, "https://dapp.example.com");
        assert_eq!(detector.detect(&android), Platform::MobileBridgeCapable);
    }

    #[test]
    fn test_interactive_result_is_stable() {
        let detector = PlatformDetector::new();
        let android = StaticHost::new(ANDROID_UA, "https://dapp.example.com");
        let desktop = StaticHost::new(DESKTOP_UA, "https://dapp.example.com");

        assert_eq!(detector.detect(&android), Platform::MobileBridgeCapable);
        assert_eq!(detector.detect(&desktop), Platform::MobileBridgeCapable);
        assert_eq!(detector.detect(&HeadlessHost), Platform::MobileBridgeCapable);
    }
}
