//! Browser services
//!
//! JavaScript interop with the wallet libraries loaded by the page. Each module
//! has a wasm32 implementation and a fallback for other targets that reports
//! the capability as missing, so the session logic builds and tests natively.

pub mod host;
pub mod mobile;
pub mod wallet;

pub use host::BrowserHost;
pub use mobile::{load_mobile_adapter_factory, BrowserMobileBridge, MobileAdapterFactory, MobileWalletAdapter};
pub use wallet::{standard_factories, InjectedWallet, InjectedWalletFactory, WalletProvider};

/// Best-effort message from a rejected JavaScript promise.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
