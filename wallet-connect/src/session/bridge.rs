//! # Mobile Wallet Bridge Registration
//!
//! On Android the dApp announces itself to the Solana Mobile Wallet Adapter
//! bridge so that Wallet Standard aware adapters can reach wallet apps on the
//! device. The bridge call itself is global and idempotent on its own, but
//! the session does not rely on that: [`BridgeRegistrar`] owns the
//! registration state and hands out the registration future exactly once.
//!
//! ## State machine
//!
//! ```text
//! NotAttempted --register()--> InProgress --settle(Ok)--> Succeeded
//!        |                          |
//!        | invalid identity         +----settle(Err)--> Failed
//!        +-------------------------------------------> Failed
//! ```
//!
//! `Failed` is a degraded mode, not an error: the standard adapters stay
//! usable and nothing is shown to the user.

use std::future::Future;

use futures::future::{self, Either, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use shared::identity::AppIdentity;

use crate::error::BridgeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeRegistration {
    #[default]
    NotAttempted,
    InProgress,
    Succeeded,
    Failed,
}

impl BridgeRegistration {
    /// The attempt has concluded, whatever the outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, BridgeRegistration::Succeeded | BridgeRegistration::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BridgeRegistration::NotAttempted => "Not attempted",
            BridgeRegistration::InProgress => "In progress",
            BridgeRegistration::Succeeded => "Registered",
            BridgeRegistration::Failed => "Unavailable",
        }
    }
}

/// Arguments passed to the bridge, serialized into the JavaScript call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub app_identity: AppIdentity,
    pub chains: Vec<String>,
}

/// Future resolving when the bridge reports success or failure.
pub type PendingRegistration = LocalBoxFuture<'static, Result<(), BridgeError>>;

/// A platform wallet bridge.
///
/// `register` must not block: it returns a future the caller drives on the UI
/// event loop and reports back through [`BridgeRegistrar::settle`].
pub trait MobileBridge {
    fn register(&self, request: &RegistrationRequest) -> PendingRegistration;
}

/// Single owner of the session's bridge registration state.
#[derive(Debug, Default)]
pub struct BridgeRegistrar {
    state: BridgeRegistration,
    last_error: Option<BridgeError>,
}

impl BridgeRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BridgeRegistration {
        self.state
    }

    /// Why the registration failed, when it did.
    pub fn last_error(&self) -> Option<&BridgeError> {
        self.last_error.as_ref()
    }

    /// Start the registration.
    ///
    /// Returns the pending future on the first call only. Every later call
    /// returns `None` and leaves the state as it is. A request with an invalid
    /// identity settles to `Failed` without reaching the bridge.
    pub fn register(
        &mut self,
        bridge: &dyn MobileBridge,
        request: &RegistrationRequest,
    ) -> Option<PendingRegistration> {
        if self.state != BridgeRegistration::NotAttempted {
            log::debug!("Mobile wallet bridge registration already attempted ({:?})", self.state);
            return None;
        }

        self.state = BridgeRegistration::InProgress;
        if let Err(e) = request.app_identity.validate() {
            self.settle(Err(e.into()));
            return None;
        }

        log::debug!(
            "Registering mobile wallet bridge for {} ({} chains)",
            request.app_identity.uri,
            request.chains.len()
        );
        Some(bridge.register(request))
    }

    /// Record the outcome of the pending registration.
    ///
    /// Only acts while `InProgress`; a settled registration never changes again.
    pub fn settle(&mut self, outcome: Result<(), BridgeError>) -> BridgeRegistration {
        if self.state != BridgeRegistration::InProgress {
            return self.state;
        }

        match outcome {
            Ok(()) => {
                log::debug!("Mobile wallet bridge registered");
                self.state = BridgeRegistration::Succeeded;
            }
            Err(e) => {
                // Double registration and a missing bridge are expected on some devices
                log::debug!("Mobile wallet bridge registration failed: {}", e);
                self.state = BridgeRegistration::Failed;
                self.last_error = Some(e);
            }
        }
        self.state
    }
}

/// Race a registration against an optional deadline.
///
/// `deadline` resolving first yields [`BridgeError::TimedOut`] carrying
/// `timeout_ms`. Without a deadline the registration is awaited for as long
/// as it takes.
pub async fn with_deadline<R, D>(
    registration: R,
    deadline: Option<D>,
    timeout_ms: u32,
) -> Result<(), BridgeError>
where
    R: Future<Output = Result<(), BridgeError>>,
    D: Future<Output = ()>,
{
    let Some(deadline) = deadline else {
        return registration.await;
    };

    match future::select(Box::pin(registration), Box::pin(deadline)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(BridgeError::TimedOut(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;

    #[derive(Default)]
    struct CountingBridge {
        calls: Cell<u32>,
        outcome: Option<BridgeError>,
    }

    impl MobileBridge for CountingBridge {
        fn register(&self, _request: &RegistrationRequest) -> PendingRegistration {
            self.calls.set(self.calls.get() + 1);
            let outcome = match &self.outcome {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            };
            future::ready(outcome).boxed_local()
        }
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            app_identity: AppIdentity::for_origin("dApp", "https://dapp.example.com"),
            chains: vec!["solana:devnet".to_string()],
        }
    }

    #[test]
    fn test_register_then_succeed() {
        let bridge = CountingBridge::default();
        let mut registrar = BridgeRegistrar::new();

        let pending = registrar.register(&bridge, &request()).unwrap();
        assert_eq!(registrar.state(), BridgeRegistration::InProgress);
        assert!(!registrar.state().is_settled());

        let state = registrar.settle(block_on(pending));
        assert_eq!(state, BridgeRegistration::Succeeded);
        assert_eq!(bridge.calls.get(), 1);
    }

    #[test]
    fn test_failure_is_recorded_not_propagated() {
        let bridge = CountingBridge {
            outcome: Some(BridgeError::AlreadyRegistered),
            ..Default::default()
        };
        let mut registrar = BridgeRegistrar::new();

        let pending = registrar.register(&bridge, &request()).unwrap();
        assert_eq!(registrar.settle(block_on(pending)), BridgeRegistration::Failed);
        assert_eq!(registrar.last_error(), Some(&BridgeError::AlreadyRegistered));
    }

    #[test]
    fn test_second_register_is_ignored() {
        let bridge = CountingBridge::default();
        let mut registrar = BridgeRegistrar::new();

        let pending = registrar.register(&bridge, &request()).unwrap();
        registrar.settle(block_on(pending));

        assert!(registrar.register(&bridge, &request()).is_none());
        assert_eq!(registrar.state(), BridgeRegistration::Succeeded);
        assert_eq!(bridge.calls.get(), 1);
    }

    #[test]
    fn test_register_while_in_progress_is_ignored() {
        let bridge = CountingBridge::default();
        let mut registrar = BridgeRegistrar::new();

        let _pending = registrar.register(&bridge, &request()).unwrap();
        assert!(registrar.register(&bridge, &request()).is_none());
        assert_eq!(registrar.state(), BridgeRegistration::InProgress);
        assert_eq!(bridge.calls.get(), 1);
    }

    #[test]
    fn test_settled_state_never_changes() {
        let bridge = CountingBridge::default();
        let mut registrar = BridgeRegistrar::new();

        let pending = registrar.register(&bridge, &request()).unwrap();
        registrar.settle(block_on(pending));
        assert_eq!(
            registrar.settle(Err(BridgeError::Rejected("late".to_string()))),
            BridgeRegistration::Succeeded
        );
    }

    #[test]
    fn test_settle_before_register_is_ignored() {
        let mut registrar = BridgeRegistrar::new();
        assert_eq!(registrar.settle(Ok(())), BridgeRegistration::NotAttempted);
    }

    #[test]
    fn test_invalid_identity_fails_without_calling_bridge() {
        let bridge = CountingBridge::default();
        let mut registrar = BridgeRegistrar::new();
        let mut request = request();
        request.app_identity.name = String::new();

        assert!(registrar.register(&bridge, &request).is_none());
        assert_eq!(registrar.state(), BridgeRegistration::Failed);
        assert!(matches!(registrar.last_error(), Some(BridgeError::InvalidIdentity(_))));
        assert_eq!(bridge.calls.get(), 0);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["appIdentity"]["name"], "dApp");
        assert_eq!(json["chains"][0], "solana:devnet");
    }

    #[test]
    fn test_deadline_elapses_first() {
        let outcome = block_on(with_deadline(
            future::pending::<Result<(), BridgeError>>(),
            Some(future::ready(())),
            3000,
        ));
        assert_eq!(outcome, Err(BridgeError::TimedOut(3000)));
    }

    #[test]
    fn test_registration_beats_deadline() {
        let outcome = block_on(with_deadline(
            future::ready(Ok(())),
            Some(future::pending::<()>()),
            3000,
        ));
        assert_eq!(outcome, Ok(()));
    }

    #[test]
    fn test_no_deadline_awaits_registration() {
        let outcome = block_on(with_deadline(
            future::ready(Err(BridgeError::Unavailable("absent".to_string()))),
            None::<future::Ready<()>>,
            0,
        ));
        assert_eq!(outcome, Err(BridgeError::Unavailable("absent".to_string())));
    }
}
