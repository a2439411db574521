//! # spark-fiber
//!
//! Incremental fiber reconciler for declarative UIs.
//!
//! ## Architecture
//!
//! Elements describe what to show. A render pass turns them into a tree of
//! fibers stored in an arena, creating one host node per fiber, a few fibers
//! per idle window. When the tree is complete, a single commit attaches every
//! host node at once, so a half-built tree is never visible.
//!
//! ```text
//! element!() → Element tree → render() → [unit of work]* → commit → host document
//!                                          ▲           │
//!                                          └─ yield ◀──┘  (idle deadline)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (NodeKind, AttrValue, Attributes, FiberFlags)
//! - [`element`] - Element descriptors, components, `element!` / `attrs!`
//! - [`host`] - HostDocument capabilities, event table, in-memory document
//! - [`reconciler`] - Fiber arena, units of work, commit phase
//! - [`pipeline`] - Idle deadlines, renderer, idle loop
//! - [`error`] - Host and render errors
//!
//! ## Example
//!
//! ```ignore
//! use spark_fiber::{element, IdleLoop, MemoryDocument, Renderer};
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.create_container();
//! let mut renderer = Renderer::new(doc);
//!
//! renderer.render(element!("div", { "id" => "foo" }, element!("h1", {}, "Hello")), root);
//! IdleLoop::default().run_until_committed(&mut renderer)?;
//!
//! assert_eq!(renderer.document().inner_html(root), "<div id=\"foo\"><h1>Hello</h1></div>");
//! ```

pub mod element;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod reconciler;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use element::{Child, Component, Element, ElementType, Props, build};

pub use error::{HostError, RenderError};

pub use host::{
    Event, EventKind, HostDocument, MemoryDocument, NodeContent, NodeId, event_for_attribute,
};

pub use reconciler::{
    CommitSummary, Fiber, FiberArena, FiberId, WorkLoop, WorkStats, WorkStatus, commit_root,
    link_children, materialize, render_immediate,
};

pub use pipeline::{
    IdleDeadline, IdleLoop, Renderer, SchedulerConfig, TimeDeadline, Unbounded, UnitBudget,
};
