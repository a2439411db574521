//! Basic Example - Build elements and render them into a document.
//!
//! Run with: cargo run --example basic

use spark_fiber::{AttrValue, ElementType, EventKind, IdleLoop, MemoryDocument, Props, Renderer, element};

fn main() -> Result<(), spark_fiber::RenderError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== spark-fiber Basic Example ===\n");

    // A component: expanded as soon as the element is built
    let app = ElementType::component(|props: Props| {
        let title = props.get("title").map(ToString::to_string).unwrap_or_default();
        element!("div", { "id" => "foo", "className" => "app" },
            element!("h1", {}, title),
            element!("button", {
                "onClick" => AttrValue::listener(|event| println!("  clicked {}", event.target)),
            }, "Click me"),
        )
    });

    let mut doc = MemoryDocument::new();
    let root = doc.create_container();
    let mut renderer = Renderer::new(doc);

    renderer.render(element!(app, { "title" => "Hello spark-fiber" }), root);
    let summary = IdleLoop::default().run_until_committed(&mut renderer)?;

    println!("\nCommitted: {:?}", summary);
    println!("Markup: {}", renderer.document().inner_html(root));

    // Fire the listener registered from `onClick`
    let doc = renderer.document();
    let div = doc.children(root)[0];
    let button = doc.children(div)[1];
    println!("\nDispatching click:");
    doc.dispatch(button, EventKind::Click)?;

    println!("\n=== Example Complete ===");
    Ok(())
}
