//! # Wallet Adapter Set
//!
//! The session only orders and filters wallet adapters; what an adapter does
//! when asked to connect belongs to the wallet library behind it.
//!
//! [`build_adapters`] is the single place that decides which adapters a user
//! is offered:
//!
//! | platform              | bridge      | mobile factory | adapter set                     |
//! |-----------------------|-------------|----------------|---------------------------------|
//! | Standard              | any         | any            | Phantom, Solflare               |
//! | MobileBridgeCapable   | Succeeded   | present        | Mobile, Phantom, Solflare       |
//! | MobileBridgeCapable   | Succeeded   | absent         | Phantom, Solflare               |
//! | MobileBridgeCapable   | Failed      | any            | Phantom, Solflare               |
//! | MobileBridgeCapable   | not settled | any            | (empty)                         |
//!
//! Before the client is confirmed the set is always empty.

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use shared::identity::AppIdentity;
use shared::network::{ConnectionEndpoint, Network};

use super::bridge::BridgeRegistration;
use super::platform::Platform;
use super::registry::AdapterRegistry;
use crate::error::{AdapterError, ConnectError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Browser extension injected into the page
    Injected,
    /// Solana Mobile Wallet Adapter talking to a wallet app on the device
    MobileBridge,
}

/// A wallet the user can connect to.
pub trait WalletAdapter {
    fn name(&self) -> &str;

    fn kind(&self) -> AdapterKind;

    /// Whether the wallet is present right now. Adapters that are always
    /// reachable (the mobile bridge) keep the default.
    fn is_installed(&self) -> bool {
        true
    }

    /// Ask the wallet to connect; resolves to the base58 public key.
    fn connect(&self) -> LocalBoxFuture<'_, Result<String, ConnectError>>;

    fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>>;
}

/// Inputs every adapter factory may use.
#[derive(Clone, Debug, PartialEq)]
pub struct AdapterContext {
    pub identity: AppIdentity,
    pub network: Network,
    pub endpoint: ConnectionEndpoint,
}

/// Constructs one kind of adapter. Construction may be refused.
pub trait AdapterFactory {
    fn name(&self) -> &str;

    fn build(&self, ctx: &AdapterContext) -> Result<Rc<dyn WalletAdapter>, AdapterError>;
}

/// Plain-data description of an adapter, safe to put in a reactive signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterInfo {
    pub name: String,
    pub kind: AdapterKind,
    pub installed: bool,
}

/// Ordered adapters; position is display priority.
#[derive(Clone, Default)]
pub struct AdapterSet {
    adapters: Vec<Rc<dyn WalletAdapter>>,
}

impl AdapterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn WalletAdapter>> {
        self.adapters.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.adapters.iter().map(|a| a.name().to_string()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn WalletAdapter>> {
        self.adapters.iter().find(|a| a.name() == name).cloned()
    }

    pub fn infos(&self) -> Vec<AdapterInfo> {
        self.adapters
            .iter()
            .map(|a| AdapterInfo {
                name: a.name().to_string(),
                kind: a.kind(),
                installed: a.is_installed(),
            })
            .collect()
    }

    fn push(&mut self, adapter: Rc<dyn WalletAdapter>) {
        self.adapters.push(adapter);
    }
}

impl fmt::Debug for AdapterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.adapters.iter().map(|a| a.name())).finish()
    }
}

/// Derive the adapters offered to the user.
///
/// A factory that refuses to build is logged and left out; if every factory
/// refuses, the result is an empty set and the UI shows that no wallet is
/// available.
pub fn build_adapters(
    client_confirmed: bool,
    platform: Platform,
    bridge: BridgeRegistration,
    registry: &AdapterRegistry,
    ctx: &AdapterContext,
) -> AdapterSet {
    let mut set = AdapterSet::new();

    if !client_confirmed {
        return set;
    }
    if platform.is_mobile_bridge_capable() && !bridge.is_settled() {
        return set;
    }

    if platform.is_mobile_bridge_capable() && bridge == BridgeRegistration::Succeeded {
        if let Some(factory) = registry.mobile() {
            try_build(&mut set, &**factory, ctx);
        }
    }

    for factory in registry.standard() {
        try_build(&mut set, &**factory, ctx);
    }

    log::debug!("Adapter set for {:?}/{:?}: {:?}", platform, bridge, set);
    set
}

fn try_build(set: &mut AdapterSet, factory: &dyn AdapterFactory, ctx: &AdapterContext) {
    match factory.build(ctx) {
        Ok(adapter) => set.push(adapter),
        Err(e) => log::warn!("Excluding {} wallet: {}", factory.name(), e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use futures::future;
    use futures::FutureExt;

    use super::*;

    pub(crate) struct FakeAdapter {
        pub name: String,
        pub kind: AdapterKind,
    }

    impl WalletAdapter for FakeAdapter {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> AdapterKind {
            self.kind
        }

        fn connect(&self) -> LocalBoxFuture<'_, Result<String, ConnectError>> {
            future::ready(Ok("11111111111111111111111111111111".to_string())).boxed_local()
        }

        fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>> {
            future::ready(Ok(())).boxed_local()
        }
    }

    /// Factory double that counts builds and can be told to refuse.
    pub(crate) struct FakeFactory {
        pub name: &'static str,
        pub kind: AdapterKind,
        pub fail: bool,
        pub builds: Rc<Cell<u32>>,
    }

    impl FakeFactory {
        pub fn injected(name: &'static str) -> Self {
            Self {
                name,
                kind: AdapterKind::Injected,
                fail: false,
                builds: Rc::new(Cell::new(0)),
            }
        }

        pub fn mobile() -> Self {
            Self {
                name: "Mobile Wallet Adapter",
                kind: AdapterKind::MobileBridge,
                ..Self::injected("Mobile Wallet Adapter")
            }
        }

        pub fn failing(name: &'static str) -> Self {
            Self {
                fail: true,
                ..Self::injected(name)
            }
        }
    }

    impl AdapterFactory for FakeFactory {
        fn name(&self) -> &str {
            self.name
        }

        fn build(&self, _ctx: &AdapterContext) -> Result<Rc<dyn WalletAdapter>, AdapterError> {
            self.builds.set(self.builds.get() + 1);
            if self.fail {
                return Err(AdapterError::new(self.name, "rejected configuration"));
            }
            Ok(Rc::new(FakeAdapter {
                name: self.name.to_string(),
                kind: self.kind,
            }))
        }
    }

    pub(crate) fn context() -> AdapterContext {
        AdapterContext {
            identity: AppIdentity::for_origin("dApp", "https://dapp.example.com"),
            network: Network::Devnet,
            endpoint: ConnectionEndpoint::resolve(None, Network::Devnet),
        }
    }

    fn registry(with_mobile: bool) -> AdapterRegistry {
        let mut registry = AdapterRegistry::new();
        registry.register_standard(Rc::new(FakeFactory::injected("Phantom")));
        registry.register_standard(Rc::new(FakeFactory::injected("Solflare")));
        if with_mobile {
            registry.install_mobile(Rc::new(FakeFactory::mobile()));
        }
        registry
    }

    #[test]
    fn test_standard_platform_ignores_bridge_state() {
        let registry = registry(true);
        for bridge in [
            BridgeRegistration::NotAttempted,
            BridgeRegistration::InProgress,
            BridgeRegistration::Succeeded,
            BridgeRegistration::Failed,
        ] {
            let set = build_adapters(true, Platform::Standard, bridge, &registry, &context());
            assert_eq!(set.names(), vec!["Phantom", "Solflare"]);
        }
    }

    #[test]
    fn test_mobile_success_with_factory_prepends_mobile_adapter() {
        let set = build_adapters(
            true,
            Platform::MobileBridgeCapable,
            BridgeRegistration::Succeeded,
            &registry(true),
            &context(),
        );
        assert_eq!(set.names(), vec!["Mobile Wallet Adapter", "Phantom", "Solflare"]);
        assert_eq!(set.infos()[0].kind, AdapterKind::MobileBridge);
    }

    #[test]
    fn test_mobile_success_without_factory() {
        let set = build_adapters(
            true,
            Platform::MobileBridgeCapable,
            BridgeRegistration::Succeeded,
            &registry(false),
            &context(),
        );
        assert_eq!(set.names(), vec!["Phantom", "Solflare"]);
    }

    #[test]
    fn test_mobile_failure_degrades_to_standard() {
        let set = build_adapters(
            true,
            Platform::MobileBridgeCapable,
            BridgeRegistration::Failed,
            &registry(true),
            &context(),
        );
        assert_eq!(set.names(), vec!["Phantom", "Solflare"]);
    }

    #[test]
    fn test_unsettled_mobile_bridge_builds_nothing() {
        let registry = registry(true);
        for bridge in [BridgeRegistration::NotAttempted, BridgeRegistration::InProgress] {
            let set = build_adapters(true, Platform::MobileBridgeCapable, bridge, &registry, &context());
            assert!(set.is_empty());
        }
    }

    #[test]
    fn test_unconfirmed_client_builds_nothing() {
        let phantom = FakeFactory::injected("Phantom");
        let builds = phantom.builds.clone();
        let mut registry = AdapterRegistry::new();
        registry.register_standard(Rc::new(phantom));

        let set = build_adapters(false, Platform::Standard, BridgeRegistration::NotAttempted, &registry, &context());
        assert!(set.is_empty());
        assert_eq!(builds.get(), 0);
    }

    #[test]
    fn test_failing_factory_is_excluded() {
        let mut registry = AdapterRegistry::new();
        registry.register_standard(Rc::new(FakeFactory::failing("Phantom")));
        registry.register_standard(Rc::new(FakeFactory::injected("Solflare")));

        let set = build_adapters(true, Platform::Standard, BridgeRegistration::NotAttempted, &registry, &context());
        assert_eq!(set.names(), vec!["Solflare"]);
    }

    #[test]
    fn test_all_factories_failing_yields_empty_set() {
        let mut registry = AdapterRegistry::new();
        registry.register_standard(Rc::new(FakeFactory::failing("Phantom")));
        registry.register_standard(Rc::new(FakeFactory::failing("Solflare")));

        let set = build_adapters(true, Platform::Standard, BridgeRegistration::NotAttempted, &registry, &context());
        assert!(set.is_empty());
        assert_eq!(format!("{:?}", set), "[]");
    }

    #[test]
    fn test_get_by_name() {
        let set = build_adapters(true, Platform::Standard, BridgeRegistration::NotAttempted, &registry(false), &context());
        assert_eq!(set.get("Solflare").map(|a| a.name().to_string()), Some("Solflare".to_string()));
        assert!(set.get("Backpack").is_none());
    }
}
