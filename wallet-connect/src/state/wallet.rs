//! Wallet connection state management

use leptos::prelude::*;

use super::session::SessionContext;
use crate::error::ConnectError;
use crate::services::host::{load_last_wallet, store_last_wallet};

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting { adapter: String },
    Connected { address: String, adapter: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn adapter(&self) -> Option<&str> {
        match self {
            WalletState::Connected { adapter, .. } | WalletState::Connecting { adapter } => Some(adapter),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(|state| state.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn adapter_name(&self) -> Option<String> {
        self.wallet.with(|state| state.adapter().map(|s| s.to_string()))
    }

    pub fn error(&self) -> Option<String> {
        self.wallet.with(|state| state.error().map(|s| s.to_string()))
    }

    /// Connect the adapter named `name` from the current session.
    pub fn connect(&self, session: SessionContext, name: String) {
        if self.wallet.with_untracked(|state| state.is_connecting()) {
            return;
        }
        let Some(adapter) = session.adapter(&name) else {
            self.wallet.set(WalletState::Error(ConnectError::UnknownAdapter(name).to_string()));
            return;
        };

        self.wallet.set(WalletState::Connecting { adapter: name.clone() });
        let wallet = self.wallet;
        leptos::task::spawn_local(async move {
            match adapter.connect().await {
                Ok(address) => {
                    store_last_wallet(Some(&name));
                    wallet.set(WalletState::Connected { address, adapter: name });
                }
                Err(e) => {
                    log::warn!("Failed to connect {}: {}", name, e);
                    wallet.set(WalletState::Error(e.to_string()));
                }
            }
        });
    }

    /// Disconnect the connected wallet and forget it for auto-connect.
    pub fn disconnect(&self, session: SessionContext) {
        let adapter = self
            .wallet
            .with_untracked(|state| state.adapter().map(|s| s.to_string()))
            .and_then(|name| session.adapter(&name));

        store_last_wallet(None);
        self.wallet.set(WalletState::Disconnected);

        if let Some(adapter) = adapter {
            leptos::task::spawn_local(async move {
                if let Err(e) = adapter.disconnect().await {
                    log::debug!("Disconnect of {} reported: {}", adapter.name(), e);
                }
            });
        }
    }

    /// Reconnect the last used wallet once the session is ready.
    fn auto_connect(&self, session: SessionContext) {
        let Some(name) = load_last_wallet() else {
            return;
        };
        let installed = session
            .adapters()
            .iter()
            .any(|info| info.name == name && info.installed);
        if installed {
            log::info!("Auto-connecting {}", name);
            self.connect(session, name);
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context(session: SessionContext) -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);

    if session.config().auto_connect {
        let attempted = StoredValue::new(false);
        Effect::new(move || {
            if session.is_ready() && !attempted.get_value() {
                attempted.set_value(true);
                context.auto_connect(session);
            }
        });
    }

    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
