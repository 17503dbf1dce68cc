//! Boundary to a plugin host that starts and stops an embedding tool.
//!
//! The value types of this crate have no lifecycle of their own. A host
//! container that launches a tool built on them drives it through this
//! trait; whatever the hooks fail with is handed back to the host as-is.

use thiserror::Error;

/// Errors a lifecycle hook reports back to its host.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Start hook failed: {0}")]
    Start(String),

    #[error("Stop hook failed: {0}")]
    Stop(String),

    #[error("Launched tool failed")]
    Launch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Start/stop hooks invoked by a host container.
///
/// `Context` is whatever handle the host passes to both hooks.
pub trait HostLifecycle {
    type Context;

    fn on_start(&mut self, context: &Self::Context) -> Result<(), LifecycleError>;

    fn on_stop(&mut self, context: &Self::Context) -> Result<(), LifecycleError>;
}
