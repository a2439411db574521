//! Fiber arena and the fiber builder.
//!
//! Fibers are NOT heap objects pointing at each other. They are records in a
//! flat arena, linked by index:
//!
//! ```text
//! Index 0: root   (parent=None, child=1,    sibling=None, node=container)
//! Index 1: div    (parent=0,    child=2,    sibling=None, node=<div>)
//! Index 2: h1     (parent=1,    child=3,    sibling=4,    node=<h1>)
//! Index 3: #text  (parent=2,    child=None, sibling=None, node="Hello")
//! Index 4: p      (parent=1,    child=None, sibling=None, node=None)
//! ```
//!
//! Abandoning a pass is just dropping the arena; no dangling links survive it.

use std::fmt;

use crate::element::Child;
use crate::types::{Attributes, FiberFlags, NODE_VALUE, NodeKind};

// =============================================================================
// Fiber Id
// =============================================================================

/// Stable index of a fiber within its pass's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiberId(pub usize);

impl fmt::Display for FiberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fiber:{}", self.0)
    }
}

// =============================================================================
// Fiber
// =============================================================================

/// One unit of work: a descriptor on its way to becoming a host node.
#[derive(Debug, Clone)]
pub struct Fiber<N> {
    pub kind: NodeKind,
    /// Descriptor attributes (never includes `children`).
    pub attributes: Attributes,
    /// Element children not yet turned into fibers. Emptied by [`link_children`].
    pub pending_children: Vec<Child>,
    /// Host node. Set once, when this fiber is the active unit of work.
    pub node: Option<N>,
    pub parent: Option<FiberId>,
    pub child: Option<FiberId>,
    pub sibling: Option<FiberId>,
    pub flags: FiberFlags,
}

impl<N> Fiber<N> {
    pub fn new(kind: NodeKind, attributes: Attributes, children: Vec<Child>) -> Self {
        Self {
            kind,
            attributes,
            pending_children: children,
            node: None,
            parent: None,
            child: None,
            sibling: None,
            flags: FiberFlags::NONE,
        }
    }

    /// Fiber for a child entry. Raw text becomes a text fiber with `nodeValue`.
    pub fn from_child(child: Child) -> Self {
        match child {
            Child::Element(element) => Self::new(
                element.kind,
                element.props.attributes,
                element.props.children,
            ),
            Child::Text(text) => Self::new(
                NodeKind::Text,
                Attributes::new().with(NODE_VALUE, text),
                Vec::new(),
            ),
        }
    }

    /// Synthetic root whose host node is the container.
    pub fn root(container: N, children: Vec<Child>) -> Self {
        let mut fiber = Self::new(NodeKind::Host(String::new()), Attributes::new(), children);
        fiber.node = Some(container);
        fiber.flags = FiberFlags::MATERIALIZED;
        fiber
    }

    pub fn is_materialized(&self) -> bool {
        self.flags.contains(FiberFlags::MATERIALIZED)
    }
}

// =============================================================================
// Fiber Arena
// =============================================================================

/// All fibers of one render pass.
#[derive(Debug, Clone)]
pub struct FiberArena<N> {
    fibers: Vec<Fiber<N>>,
}

impl<N> Default for FiberArena<N> {
    fn default() -> Self {
        Self { fibers: Vec::new() }
    }
}

impl<N> FiberArena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fiber: Fiber<N>) -> FiberId {
        let id = FiberId(self.fibers.len());
        self.fibers.push(fiber);
        id
    }

    pub fn get(&self, id: FiberId) -> Option<&Fiber<N>> {
        self.fibers.get(id.0)
    }

    pub fn get_mut(&mut self, id: FiberId) -> Option<&mut Fiber<N>> {
        self.fibers.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.fibers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fibers.is_empty()
    }

    pub fn clear(&mut self) {
        self.fibers.clear();
    }

    /// Host nodes materialized so far.
    pub fn materialized_count(&self) -> usize {
        self.fibers.iter().filter(|f| f.is_materialized()).count()
    }

    /// Child fibers of `id`, in sibling order.
    pub fn children(&self, id: FiberId) -> Vec<FiberId> {
        let mut out = Vec::new();
        let mut cursor = self.get(id).and_then(|f| f.child);
        while let Some(child) = cursor {
            out.push(child);
            cursor = self.get(child).and_then(|f| f.sibling);
        }
        out
    }

    /// Next fiber in depth-first pre-order.
    ///
    /// Prefers the first child; otherwise walks up from `id` (inclusive) to the
    /// first fiber with a sibling. `None` once the walk leaves the tree.
    pub fn next_in_preorder(&self, id: FiberId) -> Option<FiberId> {
        let fiber = self.get(id)?;
        if let Some(child) = fiber.child {
            return Some(child);
        }

        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let fiber = self.get(current)?;
            if let Some(sibling) = fiber.sibling {
                return Some(sibling);
            }
            cursor = fiber.parent;
        }
        None
    }
}

// =============================================================================
// Fiber Builder
// =============================================================================

/// Turn the pending children of `parent` into linked child fibers.
///
/// The first becomes `parent.child`, each later one the `sibling` of the
/// previous, in descriptor order. Host nodes are left unset. Runs at most once
/// per fiber; later calls are no-ops. Returns the number of fibers created.
pub fn link_children<N>(arena: &mut FiberArena<N>, parent: FiberId) -> usize {
    let children = match arena.get_mut(parent) {
        Some(fiber) if !fiber.flags.contains(FiberFlags::CHILDREN_LINKED) => {
            fiber.flags.insert(FiberFlags::CHILDREN_LINKED);
            std::mem::take(&mut fiber.pending_children)
        }
        _ => return 0,
    };

    let count = children.len();
    let mut previous: Option<FiberId> = None;

    for child in children {
        let mut fiber = Fiber::from_child(child);
        fiber.parent = Some(parent);
        let id = arena.insert(fiber);

        let link = match previous {
            None => arena.get_mut(parent).map(|p| &mut p.child),
            Some(prev) => arena.get_mut(prev).map(|p| &mut p.sibling),
        };
        if let Some(slot) = link {
            *slot = Some(id);
        }
        previous = Some(id);
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::build;
    use crate::types::AttrValue;

    fn sample_root() -> (FiberArena<u32>, FiberId) {
        let mut arena = FiberArena::new();
        let tree = build(
            "div",
            None,
            vec![
                build("h1", None, vec!["Hello".into()]).into(),
                build("p", None, Vec::new()).into(),
            ],
        );
        let root = arena.insert(Fiber::root(0, vec![tree.into()]));
        (arena, root)
    }

    #[test]
    fn test_link_children_order() {
        let mut arena = FiberArena::<u32>::new();
        let root = arena.insert(Fiber::root(
            0,
            vec!["a".into(), build("b", None, Vec::new()).into(), "c".into()],
        ));

        assert_eq!(link_children(&mut arena, root), 3);

        let kids = arena.children(root);
        assert_eq!(kids.len(), 3);
        assert_eq!(arena.get(root).unwrap().child, Some(kids[0]));
        assert_eq!(arena.get(kids[0]).unwrap().sibling, Some(kids[1]));
        assert_eq!(arena.get(kids[1]).unwrap().sibling, Some(kids[2]));
        assert_eq!(arena.get(kids[2]).unwrap().sibling, None);

        for kid in &kids {
            let fiber = arena.get(*kid).unwrap();
            assert_eq!(fiber.parent, Some(root));
            assert!(fiber.node.is_none());
        }

        let first = arena.get(kids[0]).unwrap();
        assert_eq!(first.kind, NodeKind::Text);
        assert_eq!(first.attributes.get(NODE_VALUE), Some(&AttrValue::from("a")));
        assert_eq!(arena.get(kids[1]).unwrap().kind, NodeKind::Host("b".into()));
    }

    #[test]
    fn test_link_children_empty() {
        let mut arena = FiberArena::<u32>::new();
        let root = arena.insert(Fiber::root(0, Vec::new()));
        assert_eq!(link_children(&mut arena, root), 0);
        assert_eq!(arena.get(root).unwrap().child, None);
    }

    #[test]
    fn test_link_children_runs_once() {
        let (mut arena, root) = sample_root();
        assert_eq!(link_children(&mut arena, root), 1);
        let first = arena.get(root).unwrap().child;

        assert_eq!(link_children(&mut arena, root), 0);
        assert_eq!(arena.get(root).unwrap().child, first);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_preorder_traversal() {
        let (mut arena, root) = sample_root();

        // Link everything: root -> div -> (h1 -> text, p)
        let mut order = vec![root];
        let mut cursor = Some(root);
        while let Some(id) = cursor {
            link_children(&mut arena, id);
            cursor = arena.next_in_preorder(id);
            if let Some(next) = cursor {
                order.push(next);
            }
        }

        let kinds: Vec<String> = order
            .iter()
            .skip(1)
            .map(|id| arena.get(*id).unwrap().kind.to_string())
            .collect();
        assert_eq!(kinds, vec!["div", "h1", "#text", "p"]);
        assert_eq!(order.len(), arena.len());
    }
}
