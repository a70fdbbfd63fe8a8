//! Injected Wallet Integration via wasm-bindgen
//!
//! Phantom and Solflare inject a provider object into the page. These are the
//! two standard adapters offered on every platform; on Android they also reach
//! mobile wallets once the Mobile Wallet Adapter bridge is registered.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, ConnectError};
use crate::session::{AdapterContext, AdapterFactory, AdapterKind, WalletAdapter};

/// Extension wallets supported out of the box, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Phantom,
    Solflare,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 2] = [WalletProvider::Phantom, WalletProvider::Solflare];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "Phantom",
            WalletProvider::Solflare => "Solflare",
        }
    }

    /// Key understood by the JavaScript provider lookup.
    pub fn key(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "phantom",
            WalletProvider::Solflare => "solflare",
        }
    }
}

/// Adapter over a browser-injected wallet provider.
#[derive(Clone, Copy, Debug)]
pub struct InjectedWallet {
    provider: WalletProvider,
}

impl InjectedWallet {
    pub fn new(provider: WalletProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> WalletProvider {
        self.provider
    }
}

impl WalletAdapter for InjectedWallet {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Injected
    }

    fn is_installed(&self) -> bool {
        imp::is_installed(self.provider.key())
    }

    fn connect(&self) -> LocalBoxFuture<'_, Result<String, ConnectError>> {
        let provider = self.provider;
        async move {
            if !imp::is_installed(provider.key()) {
                return Err(ConnectError::NotInstalled(provider.name().to_string()));
            }
            let address = imp::connect(provider.key()).await?;
            if !shared::utils::is_valid_address(&address) {
                return Err(ConnectError::InvalidPublicKey(address));
            }
            log::info!("{} connected: {}", provider.name(), shared::utils::truncate_address(&address));
            Ok(address)
        }
        .boxed_local()
    }

    fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>> {
        let provider = self.provider;
        async move { imp::disconnect(provider.key()).await }.boxed_local()
    }
}

/// Builds an [`InjectedWallet`]. Construction always succeeds; a missing
/// extension shows up as `is_installed() == false` and a connect error.
#[derive(Clone, Copy, Debug)]
pub struct InjectedWalletFactory {
    provider: WalletProvider,
}

impl InjectedWalletFactory {
    pub fn new(provider: WalletProvider) -> Self {
        Self { provider }
    }
}

impl AdapterFactory for InjectedWalletFactory {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn build(&self, _ctx: &AdapterContext) -> Result<Rc<dyn WalletAdapter>, AdapterError> {
        Ok(Rc::new(InjectedWallet::new(self.provider)))
    }
}

/// The two general-purpose adapters, Phantom first.
pub fn standard_factories() -> Vec<Rc<dyn AdapterFactory>> {
    WalletProvider::ALL
        .into_iter()
        .map(|provider| Rc::new(InjectedWalletFactory::new(provider)) as Rc<dyn AdapterFactory>)
        .collect()
}

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::*;

    use crate::error::ConnectError;
    use crate::services::js_error_message;

    #[wasm_bindgen(inline_js = "
function providerFor(key) {
    switch (key) {
        case 'phantom':
            if (window.phantom && window.phantom.solana && window.phantom.solana.isPhantom) {
                return window.phantom.solana;
            }
            return window.solana && window.solana.isPhantom ? window.solana : null;
        case 'solflare':
            if (window.solflare && (window.solflare.isSolflare || typeof window.solflare.connect === 'function')) {
                return window.solflare;
            }
            return window.solana && window.solana.isSolflare === true ? window.solana : null;
        default:
            return null;
    }
}

export function isWalletInstalled(key) {
    return providerFor(key) !== null;
}

export async function connectInjectedWallet(key) {
    const provider = providerFor(key);
    if (!provider) {
        throw new Error(key + ' wallet not found');
    }
    const response = await provider.connect();
    const publicKey = (response && response.publicKey) || provider.publicKey;
    if (!publicKey) {
        throw new Error('Connected but could not retrieve public key');
    }
    return publicKey.toString();
}

export async function disconnectInjectedWallet(key) {
    const provider = providerFor(key);
    if (provider && typeof provider.disconnect === 'function') {
        await provider.disconnect();
    }
}
")]
    extern "C" {
        #[wasm_bindgen(js_name = isWalletInstalled)]
        fn is_wallet_installed(key: &str) -> bool;

        #[wasm_bindgen(js_name = connectInjectedWallet, catch)]
        async fn connect_injected_wallet(key: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = disconnectInjectedWallet, catch)]
        async fn disconnect_injected_wallet(key: &str) -> Result<JsValue, JsValue>;
    }

    pub fn is_installed(key: &str) -> bool {
        is_wallet_installed(key)
    }

    pub async fn connect(key: &str) -> Result<String, ConnectError> {
        let result = connect_injected_wallet(key)
            .await
            .map_err(|e| ConnectError::Rejected(js_error_message(&e)))?;
        result
            .as_string()
            .ok_or_else(|| ConnectError::InvalidPublicKey(format!("{:?}", result)))
    }

    pub async fn disconnect(key: &str) -> Result<(), ConnectError> {
        disconnect_injected_wallet(key)
            .await
            .map(|_| ())
            .map_err(|e| ConnectError::Rejected(js_error_message(&e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use crate::error::ConnectError;

    pub fn is_installed(_key: &str) -> bool {
        false
    }

    pub async fn connect(_key: &str) -> Result<String, ConnectError> {
        Err(ConnectError::Unsupported)
    }

    pub async fn disconnect(_key: &str) -> Result<(), ConnectError> {
        Err(ConnectError::Unsupported)
    }
}
