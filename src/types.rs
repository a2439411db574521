//! Core types for spark-fiber.
//!
//! These types are shared by the element model, the reconciler and the host
//! layer: node kinds, attribute values and the per-fiber progress flags.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::rc::Rc;

use crate::host::Event;

// =============================================================================
// Reserved Names
// =============================================================================

/// Attribute key reserved for an element's children.
pub const CHILDREN: &str = "children";

/// Attribute carrying the content of a text node.
pub const NODE_VALUE: &str = "nodeValue";

/// Attribute alias that maps onto the host `class` attribute.
pub const CLASS_NAME: &str = "className";

/// Host attribute written for [`CLASS_NAME`].
pub const CLASS: &str = "class";

/// Two-character prefix marking an event binding (`onClick`, `onInput`, ...).
pub const EVENT_PREFIX: &str = "on";

// =============================================================================
// Node Kind
// =============================================================================

/// What a descriptor or fiber turns into on the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A host element with the given tag name.
    Host(String),
    /// A raw text node. Its content lives in the `nodeValue` attribute.
    Text,
}

impl NodeKind {
    /// Tag name for host elements, `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            NodeKind::Host(tag) => Some(tag),
            NodeKind::Text => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Host(tag) => f.write_str(tag),
            NodeKind::Text => f.write_str("#text"),
        }
    }
}

// =============================================================================
// Attribute Values
// =============================================================================

/// Event listener callback.
///
/// `Rc<dyn Fn>` so the same listener can sit in a descriptor, a fiber and the
/// host's listener table at once.
pub type Listener = Rc<dyn Fn(&Event)>;

/// A single attribute value.
#[derive(Clone)]
pub enum AttrValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Listener(Listener),
}

impl AttrValue {
    /// Wrap a closure as a listener value.
    pub fn listener(f: impl Fn(&Event) + 'static) -> Self {
        AttrValue::Listener(Rc::new(f))
    }

    /// The listener, if this value is one.
    pub fn as_listener(&self) -> Option<&Listener> {
        match self {
            AttrValue::Listener(listener) => Some(listener),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// String coercion used by hosts when writing attributes.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Listener(_) => f.write_str("[listener]"),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            AttrValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            AttrValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            AttrValue::Listener(l) => write!(f, "Listener({:p})", Rc::as_ptr(l)),
        }
    }
}

/// Listeners compare by identity.
impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Str(a), AttrValue::Str(b)) => a == b,
            (AttrValue::Number(a), AttrValue::Number(b)) => a == b,
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            (AttrValue::Listener(a), AttrValue::Listener(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<Listener> for AttrValue {
    fn from(value: Listener) -> Self {
        AttrValue::Listener(value)
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// Attribute bag of an element or fiber.
///
/// Never holds the reserved `children` key: children travel separately in
/// [`Props`](crate::element::Props).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    map: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute. The reserved `children` key is dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        if name == CHILDREN {
            return;
        }
        self.map.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.map.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.map.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.map.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

// =============================================================================
// Fiber Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Progress of a fiber through one render pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FiberFlags: u8 {
        const NONE = 0;
        /// The host node exists.
        const MATERIALIZED = 1 << 0;
        /// Child fibers were synthesized and linked.
        const CHILDREN_LINKED = 1 << 1;
        /// The host node was appended to its parent during commit.
        const PLACED = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_key_is_reserved() {
        let attrs = Attributes::new().with("id", "foo").with(CHILDREN, "ignored");
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains(CHILDREN));
    }

    #[test]
    fn test_attr_value_coercion() {
        assert_eq!(AttrValue::from("x").to_string(), "x");
        assert_eq!(AttrValue::from(3).to_string(), "3");
        assert_eq!(AttrValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::listener(|_| {}).to_string(), "[listener]");
    }

    #[test]
    fn test_listener_identity() {
        let a = AttrValue::listener(|_| {});
        let b = a.clone();
        let c = AttrValue::listener(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Host("div".into()).to_string(), "div");
        assert_eq!(NodeKind::Text.to_string(), "#text");
        assert_eq!(NodeKind::Text.tag(), None);
    }
}
