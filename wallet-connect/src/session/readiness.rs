//! Readiness gate for wallet UI.
//!
//! Wallet UI may render only once the session runs in the interactive client
//! and, on a bridge-capable platform, the bridge registration has concluded.
//! Rendering earlier would show one wallet list on first paint and another
//! right after. The gate latches: once open it stays open.

use super::bridge::BridgeRegistration;
use super::platform::Platform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadinessGate {
    client_confirmed: bool,
    ready: bool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the interactive client has been observed.
    ///
    /// Returns `true` only on the first call.
    pub fn confirm_client(&mut self) -> bool {
        let first = !self.client_confirmed;
        self.client_confirmed = true;
        first
    }

    pub fn client_confirmed(&self) -> bool {
        self.client_confirmed
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Re-evaluate the gate, latching it open when both conditions hold.
    pub fn evaluate(&mut self, platform: Platform, bridge: BridgeRegistration) -> bool {
        if !self.ready && self.client_confirmed && bridge_settled(platform, bridge) {
            log::debug!("Wallet session ready ({:?}, bridge {:?})", platform, bridge);
            self.ready = true;
        }
        self.ready
    }
}

/// Whether the bridge no longer holds up rendering on `platform`.
pub fn bridge_settled(platform: Platform, bridge: BridgeRegistration) -> bool {
    match platform {
        Platform::Standard => true,
        Platform::MobileBridgeCapable => bridge.is_settled(),
    }
}
