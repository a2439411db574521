//! Host layer - The document the reconciler renders into.
//!
//! The reconciler never talks to a concrete document. It needs five
//! capabilities, captured by [`HostDocument`]:
//!
//! - create an element node by tag
//! - create a text node
//! - set an attribute
//! - register an event listener
//! - append a child
//!
//! [`MemoryDocument`] implements them over an in-memory node arena. It is the
//! host used by the tests and demos and a model for real backends.

mod events;
mod memory;

pub use events::*;
pub use memory::*;

use crate::error::HostError;
use crate::types::{AttrValue, Listener};

/// Capabilities the reconciler needs from a host document.
///
/// `Node` is a cheap handle (an index, an `Rc`, a JS reference). The reconciler
/// stores one per fiber and clones it when appending.
pub trait HostDocument {
    type Node: Clone;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, HostError>;

    fn create_text_node(&mut self, text: &str) -> Result<Self::Node, HostError>;

    /// Set an attribute. The host coerces the value to a string.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &AttrValue,
    ) -> Result<(), HostError>;

    fn add_event_listener(
        &mut self,
        node: &Self::Node,
        event: EventKind,
        listener: Listener,
    ) -> Result<(), HostError>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;
}
