//! Scheduling Pipeline
//!
//! Connects the reconciler to a host's idle time.
//!
//! # Pipeline Architecture
//!
//! ```text
//! render() → WorkLoop (pending root) → idle window → resume(deadline) → ... → commit
//! ```
//!
//! ## Pieces
//!
//! 1. **IdleDeadline** - How much of the current idle window is left
//! 2. **Renderer** - Owns the document and the work loop, publishes a commit signal
//! 3. **IdleLoop** - Re-invokes the renderer batch after batch, like a browser's
//!    recurring idle callback

pub mod config;
pub mod deadline;
pub mod idle_loop;
pub mod renderer;

// Re-exports
pub use config::{DEFAULT_FRAME_BUDGET, DEFAULT_IDLE_INTERVAL, SchedulerConfig};
pub use deadline::{IdleDeadline, TimeDeadline, Unbounded, UnitBudget};
pub use idle_loop::IdleLoop;
pub use renderer::Renderer;
