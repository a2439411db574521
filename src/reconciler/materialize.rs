//! Host node materializer.
//!
//! Creates exactly one host node for one fiber (or element) and applies its
//! attributes. Never appends: attaching nodes is the commit phase's job.

use tracing::trace;

use crate::error::{RenderError, Result};
use crate::host::{HostDocument, event_for_attribute};
use crate::types::{Attributes, CLASS, CLASS_NAME, NODE_VALUE, NodeKind};

/// Create the host node for `kind` and apply `attributes`.
///
/// - text: a text node holding `nodeValue` (other attributes are ignored)
/// - `on<event>` where `<event>` is in the event table: listener registration
/// - `className`: the host `class` attribute
/// - anything else: a host attribute of the same name
pub fn materialize<D: HostDocument>(
    doc: &mut D,
    kind: &NodeKind,
    attributes: &Attributes,
) -> Result<D::Node> {
    let tag = match kind {
        NodeKind::Text => {
            let text = attributes
                .get(NODE_VALUE)
                .map(ToString::to_string)
                .unwrap_or_default();
            return Ok(doc.create_text_node(&text)?);
        }
        NodeKind::Host(tag) => tag,
    };

    let node = doc.create_element(tag)?;
    trace!(tag = %tag, attributes = attributes.len(), "materialize");

    for (name, value) in attributes {
        if let Some(event) = event_for_attribute(name) {
            let listener = value
                .as_listener()
                .ok_or_else(|| RenderError::ListenerExpected {
                    attribute: name.clone(),
                })?;
            doc.add_event_listener(&node, event, listener.clone())?;
            continue;
        }

        let host_name = if name == CLASS_NAME { CLASS } else { name.as_str() };
        doc.set_attribute(&node, host_name, value)?;
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{EventKind, MemoryDocument};
    use crate::types::AttrValue;
    use std::cell::Cell;
    use std::rc::Rc;

    fn host(tag: &str) -> NodeKind {
        NodeKind::Host(tag.to_string())
    }

    #[test]
    fn test_text_node() {
        let mut doc = MemoryDocument::new();
        let attrs = Attributes::new().with(NODE_VALUE, "Hello").with("id", "ignored");
        let node = materialize(&mut doc, &NodeKind::Text, &attrs).unwrap();
        assert_eq!(doc.text(node), Some("Hello"));
    }

    #[test]
    fn test_plain_attributes_and_class_alias() {
        let mut doc = MemoryDocument::new();
        let attrs = Attributes::new()
            .with("id", "foo")
            .with(CLASS_NAME, "big")
            .with("tabindex", 2);
        let node = materialize(&mut doc, &host("div"), &attrs).unwrap();

        assert_eq!(doc.tag(node), Some("div"));
        assert_eq!(doc.attribute(node, "id"), Some("foo"));
        assert_eq!(doc.attribute(node, "class"), Some("big"));
        assert_eq!(doc.attribute(node, "className"), None);
        assert_eq!(doc.attribute(node, "tabindex"), Some("2"));
    }

    #[test]
    fn test_event_attribute_registers_listener() {
        let mut doc = MemoryDocument::new();
        let clicked = Rc::new(Cell::new(false));
        let clicked_clone = clicked.clone();
        let attrs = Attributes::new().with(
            "onClick",
            AttrValue::listener(move |_| clicked_clone.set(true)),
        );

        let node = materialize(&mut doc, &host("button"), &attrs).unwrap();

        assert_eq!(doc.attribute(node, "onClick"), None);
        assert_eq!(doc.listener_count(node, EventKind::Click), 1);
        doc.dispatch(node, EventKind::Click).unwrap();
        assert!(clicked.get());
    }

    #[test]
    fn test_unknown_event_is_plain_attribute() {
        let mut doc = MemoryDocument::new();
        let attrs = Attributes::new().with("onFrobnicate", "x");
        let node = materialize(&mut doc, &host("div"), &attrs).unwrap();
        assert_eq!(doc.attribute(node, "onFrobnicate"), Some("x"));
    }

    #[test]
    fn test_event_attribute_requires_listener() {
        let mut doc = MemoryDocument::new();
        let attrs = Attributes::new().with("onClick", "alert(1)");
        let err = materialize(&mut doc, &host("button"), &attrs).unwrap_err();
        assert_eq!(
            err,
            RenderError::ListenerExpected {
                attribute: "onClick".into()
            }
        );
    }

    #[test]
    fn test_never_appends() {
        let mut doc = MemoryDocument::new();
        let node = materialize(&mut doc, &host("div"), &Attributes::new()).unwrap();
        assert_eq!(doc.parent(node), None);
        assert!(doc.children(node).is_empty());
    }

    #[test]
    fn test_host_errors_propagate() {
        let mut doc = MemoryDocument::new();
        let err = materialize(&mut doc, &host("not a tag"), &Attributes::new()).unwrap_err();
        assert!(matches!(err, RenderError::Host(_)));
    }
}
