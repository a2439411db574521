//! Declarative construction macros.
//!
//! `element!` is the variadic form of [`build`](super::build): every trailing
//! argument becomes one child, `&str`/`String` children become text.

/// Build an [`Attributes`](crate::types::Attributes) bag from `name => value` pairs.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::types::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::types::Attributes::new();
        $(attributes.insert($name, $value);)+
        attributes
    }};
}

/// Build an element: `element!(kind, { "k" => v, ... }, child, ...)`.
///
/// The attribute block may be omitted entirely.
#[macro_export]
macro_rules! element {
    ($kind:expr) => {
        $crate::element::build($kind, None, ::std::vec::Vec::new())
    };
    ($kind:expr, { $($name:expr => $value:expr),* $(,)? } $(, $child:expr)* $(,)?) => {
        $crate::element::build(
            $kind,
            Some($crate::attrs!($($name => $value),*)),
            ::std::vec![$($crate::element::Child::from($child)),*],
        )
    };
    ($kind:expr $(, $child:expr)+ $(,)?) => {
        $crate::element::build(
            $kind,
            None,
            ::std::vec![$($crate::element::Child::from($child)),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::element::Child;
    use crate::types::{AttrValue, NodeKind};

    #[test]
    fn test_element_macro_with_attrs() {
        let el = element!("div", { "id" => "foo", "tabindex" => 1 },
            element!("h1", {}, "Hello"),
        );

        assert_eq!(el.kind, NodeKind::Host("div".into()));
        assert_eq!(el.attributes().get("id"), Some(&AttrValue::from("foo")));
        assert_eq!(el.attributes().get("tabindex"), Some(&AttrValue::Number(1.0)));

        let Child::Element(h1) = &el.children()[0] else {
            panic!("expected element child");
        };
        assert_eq!(h1.kind, NodeKind::Host("h1".into()));
        assert!(h1.attributes().is_empty());
        assert_eq!(h1.children(), &[Child::Text("Hello".into())]);
    }

    #[test]
    fn test_element_macro_without_attrs() {
        let el = element!("ul", element!("li", "a"), element!("li", "b"));
        assert_eq!(el.children().len(), 2);

        let empty = element!("br");
        assert!(empty.children().is_empty());
    }

    #[test]
    fn test_attrs_macro() {
        let attrs = attrs!("className" => "big", "hidden" => true);
        assert_eq!(attrs.len(), 2);
        assert!(attrs!().is_empty());
    }
}
