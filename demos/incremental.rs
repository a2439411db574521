//! Incremental Example - Watch a large tree render across several idle windows.
//!
//! Each batch may only perform a handful of units of work. The container stays
//! empty until the final batch commits the whole tree at once.
//!
//! Run with: cargo run --example incremental

use spark_fiber::{Child, MemoryDocument, Renderer, UnitBudget, WorkStatus, build, element};

const ROWS: usize = 20;
const UNITS_PER_BATCH: usize = 8;

fn main() -> Result<(), spark_fiber::RenderError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== spark-fiber Incremental Example ===\n");

    let rows: Vec<Child> = (0..ROWS)
        .map(|i| element!("li", { "data-row" => i as u32 }, format!("row {i}")).into())
        .collect();
    let list = build("ul", None, rows);
    println!("Descriptor nodes: {}", list.node_count());

    let mut doc = MemoryDocument::new();
    let root = doc.create_container();
    let mut renderer = Renderer::new(doc);
    renderer.render(list, root);

    let mut batch = 0;
    loop {
        batch += 1;
        let status = renderer.resume(&mut UnitBudget::new(UNITS_PER_BATCH))?;
        let work = renderer.work_loop();
        println!(
            "batch {:>2}: {:?}, fibers built {:>2}, attached to container {}",
            batch,
            status,
            work.arena().len(),
            renderer.document().children(root).len(),
        );
        if let WorkStatus::Committed(_) = status {
            break;
        }
    }

    println!("\nStats: {:?}", renderer.work_loop().stats());
    println!("Commits observed by signal: {}", renderer.commit_signal().get());
    println!("\n=== Example Complete ===");
    Ok(())
}
