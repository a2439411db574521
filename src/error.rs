//! Error types.
//!
//! The reconciler has no error taxonomy of its own: it trusts descriptors built
//! through the element model. What can fail is the host, and those failures are
//! passed through unchanged to whoever drives the scheduler.

use thiserror::Error;

/// Failures reported by a [`HostDocument`](crate::host::HostDocument).
///
/// Variants follow the DOM exceptions a browser raises for the same mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no such node: {0}")]
    UnknownNode(String),

    #[error("hierarchy request error: {0}")]
    HierarchyRequest(String),

    #[error("invalid character in name {0:?}")]
    InvalidCharacter(String),
}

/// Errors surfaced by a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Host(#[from] HostError),

    /// An event attribute (`onClick`, ...) whose value is not a listener.
    #[error("attribute {attribute:?} names an event but its value is not a listener")]
    ListenerExpected { attribute: String },

    /// A fiber that should already hold a host node does not.
    #[error("fiber {0} has no host node")]
    MissingNode(usize),

    /// A fiber reached below the root that has no parent to attach to.
    #[error("fiber {0} has no parent")]
    Detached(usize),

    /// A fiber id that does not belong to the current pass.
    #[error("fiber {0} is not part of the current pass")]
    UnknownFiber(usize),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
