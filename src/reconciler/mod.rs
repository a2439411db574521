//! Reconciler - Fibers, units of work and the commit phase.
//!
//! A render pass has two phases:
//!
//! ```text
//! render()  →  [unit][unit][unit] | yield | [unit][unit] | yield | [unit] → commit
//!              └──────────── build phase (interruptible) ─────────────┘    └─ atomic ─┘
//! ```
//!
//! - **Build**: each unit of work materializes one fiber's host node and links
//!   its child fibers. Units run in pre-order, so a parent's node always exists
//!   before its children are visited. The loop can stop between any two units.
//! - **Commit**: once no units remain, every node is appended to its parent in
//!   one uninterrupted walk. Nothing is visible on the host before this.

pub mod commit;
pub mod fiber;
pub mod immediate;
pub mod materialize;
pub mod work_loop;

pub use commit::{CommitSummary, commit_root};
pub use fiber::{Fiber, FiberArena, FiberId, link_children};
pub use immediate::render_immediate;
pub use materialize::materialize;
pub use work_loop::{DEFAULT_YIELD_THRESHOLD, WorkLoop, WorkStats, WorkStatus};
