//! Immediate render - The non-incremental path.
//!
//! Builds the whole host subtree recursively and appends it to the container
//! in one call. Shares materialization rules with the fiber path, but cannot
//! yield, so a large tree blocks the host until it is done. Kept for hosts that
//! need output synchronously and as a reference for the incremental renderer.

use tracing::debug;

use super::materialize::materialize;
use crate::element::{Child, Element};
use crate::error::Result;
use crate::host::HostDocument;

/// Render `element` into `container` right away. Returns the number of host
/// nodes created.
pub fn render_immediate<D: HostDocument>(
    doc: &mut D,
    element: &Element,
    container: &D::Node,
) -> Result<usize> {
    let mut created = 0;
    let node = create_subtree(doc, element, &mut created)?;
    doc.append_child(container, &node)?;
    debug!(created, "immediate render");
    Ok(created)
}

/// Children are appended to their parent before the parent is attached.
fn create_subtree<D: HostDocument>(
    doc: &mut D,
    element: &Element,
    created: &mut usize,
) -> Result<D::Node> {
    let node = materialize(doc, &element.kind, &element.props.attributes)?;
    *created += 1;

    for child in &element.props.children {
        let child_node = match child {
            Child::Element(child) => create_subtree(doc, child, created)?,
            Child::Text(text) => {
                *created += 1;
                doc.create_text_node(text)?
            }
        };
        doc.append_child(&node, &child_node)?;
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;
    use crate::reconciler::WorkLoop;

    #[test]
    fn test_immediate_render() {
        let mut doc = MemoryDocument::new();
        let container = doc.create_container();
        let tree = crate::element!("div", { "className" => "card" },
            crate::element!("h1", "Title"),
            "body",
        );

        let created = render_immediate(&mut doc, &tree, &container).unwrap();

        assert_eq!(created, 4);
        assert_eq!(
            doc.inner_html(container),
            "<div class=\"card\"><h1>Title</h1>body</div>"
        );
    }

    #[test]
    fn test_matches_fiber_path() {
        let tree = crate::element!("section", { "id" => "s" },
            crate::element!("ul", crate::element!("li", "a"), crate::element!("li", "b")),
            crate::element!("p"),
            "tail",
        );

        let mut immediate = MemoryDocument::new();
        let a = immediate.create_container();
        render_immediate(&mut immediate, &tree, &a).unwrap();

        let mut fiber = MemoryDocument::new();
        let b = fiber.create_container();
        let mut work = WorkLoop::new();
        work.render(tree, b);
        work.flush(&mut fiber).unwrap();

        assert_eq!(immediate.inner_html(a), fiber.inner_html(b));
        assert_eq!(immediate.node_count(), fiber.node_count());
    }
}
