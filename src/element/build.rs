//! Element, child and component types plus the `build` entry point.

use std::fmt;
use std::rc::Rc;

use crate::types::{AttrValue, Attributes, NODE_VALUE, NodeKind};

// =============================================================================
// Element Type
// =============================================================================

/// A function component. Receives the props and returns the element it expands to.
pub type Component = Rc<dyn Fn(Props) -> Element>;

/// First argument of [`build`]: a host tag or a component.
#[derive(Clone)]
pub enum ElementType {
    Tag(String),
    Component(Component),
}

impl ElementType {
    /// Wrap a closure or fn as a component type.
    pub fn component(f: impl Fn(Props) -> Element + 'static) -> Self {
        ElementType::Component(Rc::new(f))
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Tag(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Tag(tag)
    }
}

impl From<Component> for ElementType {
    fn from(component: Component) -> Self {
        ElementType::Component(component)
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            ElementType::Component(c) => write!(f, "Component({:p})", Rc::as_ptr(c)),
        }
    }
}

// =============================================================================
// Props & Children
// =============================================================================

/// One entry of an element's children: a nested element or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Element),
    Text(String),
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Attributes plus children, as handed to components and stored on elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    pub attributes: Attributes,
    pub children: Vec<Child>,
}

impl Props {
    pub fn new(attributes: Attributes, children: Vec<Child>) -> Self {
        Self { attributes, children }
    }

    /// Shorthand for `self.attributes.get(name)`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }
}

// =============================================================================
// Element
// =============================================================================

/// An immutable element descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: NodeKind,
    pub props: Props,
}

impl Element {
    /// A host element with no attributes or children.
    pub fn host(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Host(tag.into()),
            props: Props::default(),
        }
    }

    /// A text element carrying `value` in its `nodeValue` attribute.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            props: Props {
                attributes: Attributes::new().with(NODE_VALUE, value.into()),
                children: Vec::new(),
            },
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.props.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.props.children
    }

    /// Number of nodes in this subtree, counting text children.
    pub fn node_count(&self) -> usize {
        1 + self
            .props
            .children
            .iter()
            .map(|child| match child {
                Child::Element(element) => element.node_count(),
                Child::Text(_) => 1,
            })
            .sum::<usize>()
    }
}

// =============================================================================
// Build
// =============================================================================

/// Build an element descriptor.
///
/// Component types are invoked immediately with `Props { attributes, children }`
/// and whatever they return is the result. Tags produce a host element.
/// `None` attributes mean an empty bag.
pub fn build(
    kind: impl Into<ElementType>,
    attributes: Option<Attributes>,
    children: Vec<Child>,
) -> Element {
    let props = Props {
        attributes: attributes.unwrap_or_default(),
        children,
    };

    match kind.into() {
        ElementType::Component(component) => component(props),
        ElementType::Tag(tag) => Element {
            kind: NodeKind::Host(tag),
            props,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_build_host_element() {
        let el = build(
            "div",
            Some(Attributes::new().with("id", "foo")),
            vec![Child::from("hi")],
        );
        assert_eq!(el.kind, NodeKind::Host("div".into()));
        assert_eq!(el.attributes().get("id"), Some(&AttrValue::from("foo")));
        assert_eq!(el.children(), &[Child::Text("hi".into())]);
    }

    #[test]
    fn test_build_defaults() {
        let el = build("span", None, Vec::new());
        assert!(el.attributes().is_empty());
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_component_expands_eagerly() {
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();

        let app = ElementType::component(move |props: Props| {
            calls_clone.set(calls_clone.get() + 1);
            let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("").to_string();
            let mut children = vec![Child::from(build("h1", None, vec![title.into()]))];
            children.extend(props.children);
            build("section", None, children)
        });

        let el = build(
            app,
            Some(Attributes::new().with("title", "Hello")),
            vec![Child::from("body")],
        );

        assert_eq!(calls.get(), 1);
        assert_eq!(el.kind, NodeKind::Host("section".into()));
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.children()[1], Child::Text("body".into()));
    }

    #[test]
    fn test_text_element() {
        let el = Element::text("Hello");
        assert!(el.kind.is_text());
        assert_eq!(el.attributes().get(NODE_VALUE), Some(&AttrValue::from("Hello")));
    }

    #[test]
    fn test_node_count() {
        let el = build(
            "div",
            None,
            vec![
                build("h1", None, vec!["a".into()]).into(),
                "b".into(),
            ],
        );
        assert_eq!(el.node_count(), 4);
    }
}
