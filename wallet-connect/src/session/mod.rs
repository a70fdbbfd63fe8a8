//! # Wallet Session Bootstrapper
//!
//! Given the runtime environment and a [`SessionConfig`], a [`WalletSession`]
//! produces the three things the rendering layer consumes:
//!
//! - the RPC [`ConnectionEndpoint`], resolved once at construction
//! - the ordered [`AdapterSet`] offered to the user
//! - a readiness flag gating wallet UI
//!
//! ## Lifecycle
//!
//! ```text
//! new(config, registry)             endpoint resolved, nothing else known
//!   |
//! bootstrap(env, bridge)            first client-side effect: platform detected,
//!   |                               bridge registration started on Android
//!   |
//! settle_bridge(outcome)            registration future resolved (or timed out)
//! install_mobile_factory(factory)   optional mobile adapter module loaded
//! ```
//!
//! Every transition re-evaluates the [`ReadinessGate`]; the adapter set is
//! only built once the gate is open, so on Android it is never built while
//! the bridge registration is still pending. The session is single-threaded
//! and owned by the UI event loop; async work is driven outside and reported
//! back through the methods above.
//!
//! None of the faults handled here (unreadable user agent, failed
//! registration, missing module, adapter construction) leave this type.

pub mod adapters;
pub mod bridge;
pub mod environment;
pub mod platform;
pub mod readiness;
pub mod registry;


use std::rc::Rc;

use serde::Serialize;
use shared::identity::AppIdentity;
use shared::network::{ConnectionEndpoint, Network};

use crate::config::SessionConfig;
use crate::error::BridgeError;
use crate::utils::constants::FALLBACK_APP_ORIGIN;

pub use adapters::{build_adapters, AdapterContext, AdapterFactory, AdapterInfo, AdapterKind, AdapterSet, WalletAdapter};
pub use bridge::{BridgeRegistrar, BridgeRegistration, MobileBridge, PendingRegistration, RegistrationRequest};
pub use environment::{HeadlessHost, HostEnvironment, StaticHost};
pub use platform::{DeviceKind, Platform, PlatformDetector};
pub use readiness::ReadinessGate;
pub use registry::AdapterRegistry;

/// Plain-data view of a session, published to the UI after every transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub endpoint: String,
    pub network: Network,
    pub platform: Platform,
    pub device: DeviceKind,
    pub bridge: BridgeRegistration,
    pub ready: bool,
    pub adapters: Vec<AdapterInfo>,
}

pub struct WalletSession {
    config: SessionConfig,
    endpoint: ConnectionEndpoint,
    identity: AppIdentity,
    detector: PlatformDetector,
    platform: Platform,
    device: DeviceKind,
    registrar: BridgeRegistrar,
    registry: AdapterRegistry,
    gate: ReadinessGate,
    adapters: AdapterSet,
}

impl WalletSession {
    pub fn new(config: SessionConfig, registry: AdapterRegistry) -> Self {
        let endpoint = ConnectionEndpoint::resolve(config.endpoint_override.as_deref(), config.network);
        let identity = AppIdentity::for_origin(config.app_name.clone(), FALLBACK_APP_ORIGIN);
        log::debug!("Wallet session created for {} ({})", config.network, endpoint);

        Self {
            config,
            endpoint,
            identity,
            detector: PlatformDetector::new(),
            platform: Platform::Standard,
            device: DeviceKind::Desktop,
            registrar: BridgeRegistrar::new(),
            registry,
            gate: ReadinessGate::new(),
            adapters: AdapterSet::new(),
        }
    }

    /// Confirm the interactive client and start the session.
    ///
    /// Call from the first client-side effect. Detects the platform, derives
    /// the app identity from the page origin and, on a bridge-capable
    /// platform, starts the bridge registration. The returned future must be
    /// driven by the caller and its outcome passed to
    /// [`WalletSession::settle_bridge`].
    ///
    /// Only the first call does anything.
    pub fn bootstrap(
        &mut self,
        env: &dyn HostEnvironment,
        bridge: &dyn MobileBridge,
    ) -> Option<PendingRegistration> {
        if !self.gate.confirm_client() {
            log::debug!("Wallet session already bootstrapped");
            return None;
        }

        self.device = self.detector.detect_device(env);
        self.platform = Platform::from(self.device);
        if let Some(origin) = env.origin() {
            self.identity = AppIdentity::for_origin(self.config.app_name.clone(), &origin);
        }
        log::info!("Wallet session bootstrapped on {} ({:?})", self.device.label(), self.platform);

        let pending = if self.platform.is_mobile_bridge_capable() {
            let request = self.registration_request();
            self.registrar.register(bridge, &request)
        } else {
            None
        };

        self.refresh();
        pending
    }

    /// Record the outcome of the bridge registration started by `bootstrap`.
    pub fn settle_bridge(&mut self, outcome: Result<(), BridgeError>) -> BridgeRegistration {
        let before = self.registrar.state();
        let after = self.registrar.settle(outcome);
        if before != after {
            self.refresh();
        }
        after
    }

    /// Make the richer mobile adapter available, possibly after first paint.
    ///
    /// Returns whether the registry changed.
    pub fn install_mobile_factory(&mut self, factory: Rc<dyn AdapterFactory>) -> bool {
        if !self.registry.install_mobile(factory) {
            return false;
        }
        self.refresh();
        true
    }

    /// Re-evaluate readiness and rebuild the adapter set if the gate is open.
    fn refresh(&mut self) {
        let bridge = self.registrar.state();
        if self.gate.evaluate(self.platform, bridge) {
            let ctx = self.adapter_context();
            self.adapters = build_adapters(self.gate.client_confirmed(), self.platform, bridge, &self.registry, &ctx);
        }
    }

    fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            app_identity: self.identity.clone(),
            chains: self.config.chains.clone(),
        }
    }

    pub fn adapter_context(&self) -> AdapterContext {
        AdapterContext {
            identity: self.identity.clone(),
            network: self.config.network,
            endpoint: self.endpoint.clone(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            endpoint: self.endpoint.to_string(),
            network: self.config.network,
            platform: self.platform,
            device: self.device,
            bridge: self.registrar.state(),
            ready: self.gate.is_ready(),
            adapters: self.adapters.infos(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &ConnectionEndpoint {
        &self.endpoint
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn device(&self) -> DeviceKind {
        self.device
    }

    pub fn bridge_state(&self) -> BridgeRegistration {
        self.registrar.state()
    }

    pub fn bridge_error(&self) -> Option<&BridgeError> {
        self.registrar.last_error()
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    pub fn adapters(&self) -> &AdapterSet {
        &self.adapters
    }

    /// The live adapter named `name`, if it is in the current set.
    pub fn adapter(&self, name: &str) -> Option<Rc<dyn WalletAdapter>> {
        self.adapters.get(name)
    }
}
