//! Host environment capability.
//!
//! The session never reads browser globals directly. Whatever runs the session
//! hands it a [`HostEnvironment`], which makes "are we in an interactive
//! client?" an explicit input instead of something inferred from `window`.

/// Read-only view of the runtime hosting the session.
pub trait HostEnvironment {
    /// Whether a navigation context (window/navigator) is available.
    fn is_interactive(&self) -> bool;

    /// The user-agent string, if it can be read.
    fn user_agent(&self) -> Option<String>;

    /// The page origin (`scheme://host[:port]`), if it can be read.
    fn origin(&self) -> Option<String>;
}

/// No navigation context: server rendering, workers and native tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessHost;

impl HostEnvironment for HeadlessHost {
    fn is_interactive(&self) -> bool {
        false
    }

    fn user_agent(&self) -> Option<String> {
        None
    }

    fn origin(&self) -> Option<String> {
        None
    }
}

/// An interactive environment with fixed values.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    pub user_agent: Option<String>,
    pub origin: Option<String>,
}

impl StaticHost {
    pub fn new(user_agent: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            origin: Some(origin.into()),
        }
    }
}

impl HostEnvironment for StaticHost {
    fn is_interactive(&self) -> bool {
        true
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn origin(&self) -> Option<String> {
        self.origin.clone()
    }
}
