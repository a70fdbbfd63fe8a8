//! Wallet session context
//!
//! Bridges the [`WalletSession`] state machine to Leptos. The session itself
//! holds `Rc` adapters and lives in a local [`StoredValue`]; the UI reads the
//! [`SessionSnapshot`] published into an [`RwSignal`] after every transition.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::services::{load_mobile_adapter_factory, standard_factories, BrowserHost, BrowserMobileBridge};
use crate::session::bridge::with_deadline;
use crate::session::{AdapterInfo, AdapterRegistry, SessionSnapshot, WalletAdapter, WalletSession};

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<WalletSession, LocalStorage>,
    pub snapshot: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    pub fn new(config: SessionConfig) -> Self {
        let registry = AdapterRegistry::with_standard(standard_factories());
        let session = WalletSession::new(config, registry);
        let snapshot = RwSignal::new(session.snapshot());
        Self {
            session: StoredValue::new_local(session),
            snapshot,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot.with(|snapshot| snapshot.ready)
    }

    pub fn adapters(&self) -> Vec<AdapterInfo> {
        self.snapshot.with(|snapshot| snapshot.adapters.clone())
    }

    pub fn config(&self) -> SessionConfig {
        self.session.with_value(|session| session.config().clone())
    }

    /// Live adapter for a connect request.
    pub fn adapter(&self, name: &str) -> Option<Rc<dyn WalletAdapter>> {
        self.session.with_value(|session| session.adapter(name))
    }

    fn publish(&self) {
        let snapshot = self.session.with_value(|session| session.snapshot());
        self.snapshot.set(snapshot);
    }

    /// Start the session from the client. Safe to call more than once.
    ///
    /// Spawns the bridge registration (raced against the configured
    /// deadline) and, on a bridge-capable platform, the optional mobile
    /// adapter module load. Both report back into the session when they
    /// resolve; neither is awaited here.
    pub fn bootstrap(&self) {
        let mut pending = None;
        self.session.update_value(|session| {
            pending = session.bootstrap(&BrowserHost, &BrowserMobileBridge);
        });
        self.publish();

        let config = self.config();
        let ctx = *self;

        if let Some(pending) = pending {
            let timeout_ms = config.bridge_timeout_ms;
            leptos::task::spawn_local(async move {
                let deadline = timeout_ms.map(TimeoutFuture::new);
                let outcome = with_deadline(pending, deadline, timeout_ms.unwrap_or_default()).await;
                ctx.session.update_value(|session| {
                    session.settle_bridge(outcome);
                });
                ctx.publish();
            });
        }

        let mobile = self.snapshot.with_untracked(|snapshot| snapshot.platform.is_mobile_bridge_capable());
        if mobile {
            let module_url = config.mobile_adapter_module;
            leptos::task::spawn_local(async move {
                if let Some(factory) = load_mobile_adapter_factory(module_url).await {
                    let mut changed = false;
                    ctx.session.update_value(|session| {
                        changed = session.install_mobile_factory(Rc::new(factory));
                    });
                    if changed {
                        ctx.publish();
                    }
                }
            });
        }
    }
}

/// Create the session context and bootstrap it once the app runs in the client.
pub fn provide_session_context(config: SessionConfig) -> SessionContext {
    let context = SessionContext::new(config);
    provide_context(context);

    // Effects only run in the browser, after the first render
    Effect::new(move || {
        context.bootstrap();
    });

    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
