//! Browser host environment and the small bit of browser storage the app uses.

use crate::session::HostEnvironment;
use crate::utils::constants::LAST_WALLET_STORAGE_KEY;

/// [`HostEnvironment`] backed by `window`. Outside wasm32 it has no
/// navigation context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl HostEnvironment for BrowserHost {
    fn is_interactive(&self) -> bool {
        imp::has_window()
    }

    fn user_agent(&self) -> Option<String> {
        imp::user_agent()
    }

    fn origin(&self) -> Option<String> {
        imp::origin()
    }
}

/// Name of the adapter the user connected last, if any.
pub fn load_last_wallet() -> Option<String> {
    imp::storage_get(LAST_WALLET_STORAGE_KEY)
}

/// Remember (or forget, with `None`) the adapter to auto-connect next time.
pub fn store_last_wallet(name: Option<&str>) {
    imp::storage_set(LAST_WALLET_STORAGE_KEY, name);
}

#[cfg(target_arch = "wasm32")]
mod imp {
    pub fn has_window() -> bool {
        web_sys::window().is_some()
    }

    pub fn user_agent() -> Option<String> {
        web_sys::window()?.navigator().user_agent().ok()
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn storage_get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn storage_set(key: &str, value: Option<&str>) {
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match value {
            Some(value) => storage.set_item(key, value),
            None => storage.remove_item(key),
        };
        if let Err(e) = result {
            log::debug!("localStorage write for '{}' failed: {:?}", key, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn has_window() -> bool {
        false
    }

    pub fn user_agent() -> Option<String> {
        None
    }

    pub fn origin() -> Option<String> {
        None
    }

    pub fn storage_get(_key: &str) -> Option<String> {
        None
    }

    pub fn storage_set(_key: &str, _value: Option<&str>) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::session::{Platform, PlatformDetector};

    #[test]
    fn test_browser_host_outside_wasm_is_headless() {
        assert!(!BrowserHost.is_interactive());
        assert_eq!(PlatformDetector::new().detect(&BrowserHost), Platform::Standard);
        assert_eq!(load_last_wallet(), None);
    }
}
