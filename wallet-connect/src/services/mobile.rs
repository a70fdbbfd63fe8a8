//! Solana Mobile Wallet Adapter interop
//!
//! Two independent pieces, both optional at runtime:
//!
//! - **Bridge registration** through `@solana-mobile/wallet-standard-mobile`
//!   (`registerMwa`), expected on `globalThis.SolanaMobileWalletStandard`.
//!   Configured with the library's default authorization cache, chain
//!   selector and wallet-not-found handler.
//! - **Richer mobile adapter** from `@solana-mobile/wallet-adapter-mobile`,
//!   loaded with a dynamic `import()` of the configured module URL or found on
//!   `globalThis.SolanaMobileWalletAdapter`. Its absence only means the adapter
//!   is not offered.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use shared::identity::AppIdentity;
use wasm_bindgen::JsValue;

use crate::error::{AdapterError, ConnectError};
use crate::session::{
    AdapterContext, AdapterFactory, AdapterKind, MobileBridge, PendingRegistration, RegistrationRequest,
    WalletAdapter,
};
use crate::utils::constants::WALLET_DIRECTORY_URL;

pub const MOBILE_ADAPTER_NAME: &str = "Mobile Wallet Adapter";

/// [`MobileBridge`] backed by the page's wallet-standard-mobile module.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMobileBridge;

impl MobileBridge for BrowserMobileBridge {
    fn register(&self, request: &RegistrationRequest) -> PendingRegistration {
        let request = request.clone();
        async move { imp::register(&request).await }.boxed_local()
    }
}

/// Options handed to the mobile adapter constructor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MobileAdapterOptions<'a> {
    app_identity: &'a AppIdentity,
    cluster: &'static str,
    wallet_directory_url: &'static str,
}

/// Factory over a loaded mobile adapter module.
pub struct MobileAdapterFactory {
    module: JsValue,
}

impl AdapterFactory for MobileAdapterFactory {
    fn name(&self) -> &str {
        MOBILE_ADAPTER_NAME
    }

    fn build(&self, ctx: &AdapterContext) -> Result<Rc<dyn WalletAdapter>, AdapterError> {
        let options = MobileAdapterOptions {
            app_identity: &ctx.identity,
            cluster: ctx.network.cluster(),
            wallet_directory_url: WALLET_DIRECTORY_URL,
        };
        let handle = imp::create_adapter(&self.module, &options)
            .map_err(|reason| AdapterError::new(MOBILE_ADAPTER_NAME, reason))?;
        Ok(Rc::new(MobileWalletAdapter { handle }))
    }
}

/// A constructed `SolanaMobileWalletAdapter` instance.
pub struct MobileWalletAdapter {
    handle: JsValue,
}

impl WalletAdapter for MobileWalletAdapter {
    fn name(&self) -> &str {
        MOBILE_ADAPTER_NAME
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::MobileBridge
    }

    fn connect(&self) -> LocalBoxFuture<'_, Result<String, ConnectError>> {
        async move {
            let address = imp::connect(&self.handle).await?;
            if !shared::utils::is_valid_address(&address) {
                return Err(ConnectError::InvalidPublicKey(address));
            }
            Ok(address)
        }
        .boxed_local()
    }

    fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>> {
        async move { imp::disconnect(&self.handle).await }.boxed_local()
    }
}

/// Try to load the richer mobile adapter module.
///
/// Resolves to `None` when the module is missing or fails to load; that is
/// logged and otherwise ignored.
pub async fn load_mobile_adapter_factory(module_url: Option<String>) -> Option<MobileAdapterFactory> {
    match imp::load_module(module_url.as_deref()).await {
        Ok(module) => {
            log::debug!("Mobile wallet adapter module loaded");
            Some(MobileAdapterFactory { module })
        }
        Err(reason) => {
            log::debug!("Mobile wallet adapter module not available: {}", reason);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::*;

    use super::MobileAdapterOptions;
    use crate::error::{BridgeError, ConnectError};
    use crate::services::js_error_message;
    use crate::session::RegistrationRequest;

    #[wasm_bindgen(inline_js = "
function unavailable(message) {
    const error = new Error(message);
    error.code = 'unavailable';
    return error;
}

export async function registerMobileBridge(request) {
    const mwa = globalThis.SolanaMobileWalletStandard;
    if (!mwa || typeof mwa.registerMwa !== 'function') {
        throw unavailable('wallet-standard-mobile is not loaded');
    }
    await mwa.registerMwa({
        appIdentity: request.appIdentity,
        authorizationCache: mwa.createDefaultAuthorizationCache(),
        chains: request.chains,
        chainSelector: mwa.createDefaultChainSelector(),
        onWalletNotFound: mwa.createDefaultWalletNotFoundHandler(),
    });
}

export async function loadMobileAdapterModule(url) {
    if (url) {
        return await import(url);
    }
    if (globalThis.SolanaMobileWalletAdapter) {
        return globalThis.SolanaMobileWalletAdapter;
    }
    throw unavailable('wallet-adapter-mobile is not loaded');
}

export function createMobileAdapter(module, options) {
    if (!module || typeof module.SolanaMobileWalletAdapter !== 'function') {
        throw new Error('module does not export SolanaMobileWalletAdapter');
    }
    return new module.SolanaMobileWalletAdapter({
        addressSelector: module.createDefaultAddressSelector(),
        appIdentity: options.appIdentity,
        authorizationResultCache: module.createDefaultAuthorizationResultCache(),
        cluster: options.cluster,
        onWalletNotFound: async () => {
            window.open(options.walletDirectoryUrl, '_blank');
        },
    });
}

export async function connectMobileAdapter(adapter) {
    await adapter.connect();
    if (!adapter.publicKey) {
        throw new Error('Connected but could not retrieve public key');
    }
    return adapter.publicKey.toBase58();
}

export async function disconnectMobileAdapter(adapter) {
    await adapter.disconnect();
}
")]
    extern "C" {
        #[wasm_bindgen(js_name = registerMobileBridge, catch)]
        async fn register_mobile_bridge(request: JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = loadMobileAdapterModule, catch)]
        async fn load_mobile_adapter_module(url: Option<String>) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = createMobileAdapter, catch)]
        fn create_mobile_adapter(module: &JsValue, options: JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = connectMobileAdapter, catch)]
        async fn connect_mobile_adapter(adapter: &JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = disconnectMobileAdapter, catch)]
        async fn disconnect_mobile_adapter(adapter: &JsValue) -> Result<JsValue, JsValue>;
    }

    fn is_unavailable(err: &JsValue) -> bool {
        js_sys::Reflect::get(err, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_string())
            .is_some_and(|code| code == "unavailable")
    }

    pub async fn register(request: &RegistrationRequest) -> Result<(), BridgeError> {
        let request = serde_wasm_bindgen::to_value(request)
            .map_err(|e| BridgeError::Rejected(e.to_string()))?;
        match register_mobile_bridge(request).await {
            Ok(_) => Ok(()),
            Err(e) if is_unavailable(&e) => Err(BridgeError::Unavailable(js_error_message(&e))),
            Err(e) => {
                let message = js_error_message(&e);
                if message.to_ascii_lowercase().contains("already") {
                    Err(BridgeError::AlreadyRegistered)
                } else {
                    Err(BridgeError::Rejected(message))
                }
            }
        }
    }

    pub async fn load_module(url: Option<&str>) -> Result<JsValue, String> {
        load_mobile_adapter_module(url.map(str::to_string))
            .await
            .map_err(|e| js_error_message(&e))
    }

    pub fn create_adapter(module: &JsValue, options: &MobileAdapterOptions<'_>) -> Result<JsValue, String> {
        let options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;
        create_mobile_adapter(module, options).map_err(|e| js_error_message(&e))
    }

    pub async fn connect(adapter: &JsValue) -> Result<String, ConnectError> {
        let result = connect_mobile_adapter(adapter)
            .await
            .map_err(|e| ConnectError::Rejected(js_error_message(&e)))?;
        result
            .as_string()
            .ok_or_else(|| ConnectError::InvalidPublicKey(format!("{:?}", result)))
    }

    pub async fn disconnect(adapter: &JsValue) -> Result<(), ConnectError> {
        disconnect_mobile_adapter(adapter)
            .await
            .map(|_| ())
            .map_err(|e| ConnectError::Rejected(js_error_message(&e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use wasm_bindgen::JsValue;

    use super::MobileAdapterOptions;
    use crate::error::{BridgeError, ConnectError};
    use crate::session::RegistrationRequest;

    fn unsupported() -> String {
        "Mobile Wallet Adapter is only available when compiled for wasm32".to_string()
    }

    pub async fn register(_request: &RegistrationRequest) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable(unsupported()))
    }

    pub async fn load_module(_url: Option<&str>) -> Result<JsValue, String> {
        Err(unsupported())
    }

    pub fn create_adapter(_module: &JsValue, _options: &MobileAdapterOptions<'_>) -> Result<JsValue, String> {
        Err(unsupported())
    }

    pub async fn connect(_adapter: &JsValue) -> Result<String, ConnectError> {
        Err(ConnectError::Unsupported)
    }

    pub async fn disconnect(_adapter: &JsValue) -> Result<(), ConnectError> {
        Err(ConnectError::Unsupported)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use shared::network::Network;

    use super::*;
    use crate::error::BridgeError;
    use crate::session::adapters::tests::context;

    #[test]
    fn test_bridge_outside_browser_is_unavailable() {
        let request = RegistrationRequest {
            app_identity: context().identity,
            chains: vec![Network::Devnet.chain_id().to_string()],
        };
        let outcome = block_on(BrowserMobileBridge.register(&request));
        assert!(matches!(outcome, Err(BridgeError::Unavailable(_))));
    }

    #[test]
    fn test_module_outside_browser_is_absent() {
        assert!(block_on(load_mobile_adapter_factory(None)).is_none());
    }

    #[test]
    fn test_adapter_options_shape() {
        let ctx = context();
        let options = MobileAdapterOptions {
            app_identity: &ctx.identity,
            cluster: ctx.network.cluster(),
            wallet_directory_url: WALLET_DIRECTORY_URL,
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["cluster"], "devnet");
        assert_eq!(json["appIdentity"]["uri"], "https://dapp.example.com");
        assert_eq!(json["walletDirectoryUrl"], WALLET_DIRECTORY_URL);
    }
}
