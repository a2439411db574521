//! In-memory host document.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`], the same way the
//! component registry hands out indices: no node is ever moved or freed while
//! the document lives, so ids stay valid for its whole lifetime.
//!
//! Behaves like a browser document where it matters to the reconciler:
//! invalid names are rejected, text nodes cannot have children, a node cannot be
//! appended inside itself, and appending an attached node moves it.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Write as _};

use super::{Event, EventKind, HostDocument};
use crate::error::HostError;
use crate::types::{AttrValue, Listener};

// =============================================================================
// Node Handles
// =============================================================================

/// Index of a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Element { tag: String },
    Text(String),
}

struct NodeData {
    content: NodeContent,
    attributes: BTreeMap<String, String>,
    listeners: HashMap<EventKind, Vec<Listener>>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(content: NodeContent) -> Self {
        Self {
            content,
            attributes: BTreeMap::new(),
            listeners: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

// =============================================================================
// Memory Document
// =============================================================================

/// A host document kept entirely in memory.
#[derive(Default)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached `div` to render into.
    pub fn create_container(&mut self) -> NodeId {
        self.alloc(NodeContent::Element {
            tag: "div".to_string(),
        })
    }

    fn alloc(&mut self, content: NodeContent) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(content));
        id
    }

    fn data(&self, id: NodeId) -> Result<&NodeData, HostError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| HostError::UnknownNode(id.to_string()))
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData, HostError> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| HostError::UnknownNode(id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Total number of nodes ever created.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn content(&self, id: NodeId) -> Option<&NodeContent> {
        self.nodes.get(id.0).map(|n| &n.content)
    }

    /// Tag name, `None` for text nodes and unknown ids.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.content(id)? {
            NodeContent::Element { tag } => Some(tag),
            NodeContent::Text(_) => None,
        }
    }

    /// Text content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.content(id)? {
            NodeContent::Text(text) => Some(text),
            NodeContent::Element { .. } => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    /// All attributes of a node, sorted by name.
    pub fn attributes(&self, id: NodeId) -> Vec<(&str, &str)> {
        self.nodes
            .get(id.0)
            .map(|n| {
                n.attributes
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn listener_count(&self, id: NodeId, event: EventKind) -> usize {
        self.nodes
            .get(id.0)
            .and_then(|n| n.listeners.get(&event))
            .map_or(0, Vec::len)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Invoke every listener registered for `event` on `id`.
    ///
    /// No bubbling. Returns the number of listeners called.
    pub fn dispatch(&self, id: NodeId, event: EventKind) -> Result<usize, HostError> {
        self.dispatch_event(id, &Event::new(event, id.to_string()))
    }

    /// Dispatch a prepared event payload on `id`.
    pub fn dispatch_event(&self, id: NodeId, event: &Event) -> Result<usize, HostError> {
        // Clone the handles first so listeners run without borrowing the node
        let listeners: Vec<Listener> = self
            .data(id)?
            .listeners
            .get(&event.kind)
            .cloned()
            .unwrap_or_default();

        for listener in &listeners {
            listener(event);
        }
        Ok(listeners.len())
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    /// Serialize the subtree under `id` as markup.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Serialize only the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_html(child, &mut out);
        }
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.content {
            NodeContent::Text(text) => out.push_str(&escape(text)),
            NodeContent::Element { tag } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in &node.attributes {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                for &child in &node.children {
                    self.write_html(child, out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut of: NodeId) -> bool {
        loop {
            if candidate == of {
                return true;
            }
            match self.parent(of) {
                Some(parent) => of = parent,
                None => return false,
            }
        }
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Element and attribute names: non-empty, no whitespace or markup characters.
fn validate_name(name: &str) -> Result<(), HostError> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='));
    if invalid {
        return Err(HostError::InvalidCharacter(name.to_string()));
    }
    Ok(())
}

// =============================================================================
// HostDocument
// =============================================================================

impl HostDocument for MemoryDocument {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        validate_name(tag)?;
        Ok(self.alloc(NodeContent::Element {
            tag: tag.to_string(),
        }))
    }

    fn create_text_node(&mut self, text: &str) -> Result<NodeId, HostError> {
        Ok(self.alloc(NodeContent::Text(text.to_string())))
    }

    fn set_attribute(
        &mut self,
        node: &NodeId,
        name: &str,
        value: &AttrValue,
    ) -> Result<(), HostError> {
        validate_name(name)?;
        let data = self.data_mut(*node)?;
        if let NodeContent::Text(_) = data.content {
            return Err(HostError::HierarchyRequest(format!(
                "text node {node} cannot carry attributes"
            )));
        }
        data.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: &NodeId,
        event: EventKind,
        listener: Listener,
    ) -> Result<(), HostError> {
        self.data_mut(*node)?
            .listeners
            .entry(event)
            .or_default()
            .push(listener);
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        let (parent, child) = (*parent, *child);

        if let NodeContent::Text(_) = self.data(parent)?.content {
            return Err(HostError::HierarchyRequest(format!(
                "text node {parent} cannot have children"
            )));
        }
        self.data(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(HostError::HierarchyRequest(format!(
                "{child} is an ancestor of {parent}"
            )));
        }

        // An attached node moves to its new parent
        if let Some(previous) = self.data(child)?.parent {
            self.data_mut(previous)?.children.retain(|&c| c != child);
        }

        self.data_mut(parent)?.children.push(child);
        self.data_mut(child)?.parent = Some(parent);
        Ok(())
    }
}
