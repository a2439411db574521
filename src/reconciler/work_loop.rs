//! Unit-of-work scheduler.
//!
//! A [`WorkLoop`] is the scheduler context: it owns the fiber arena of the pass
//! in flight, the work-in-progress root and the next unit of work. Nothing is
//! global; the host integration keeps one `WorkLoop` for the life of the
//! process and calls [`WorkLoop::resume`] from its idle callback.
//!
//! # States
//!
//! ```text
//!            render()                    resume(): next unit is None
//!   Idle ─────────────────▶ Working ─────────────────────────────────▶ Idle
//!                           │     ▲        (commit, clear root)
//!                           └─────┘
//!                  resume(): budget ran out
//! ```
//!
//! Only one pass is tracked. Calling `render` again before the previous pass
//! commits drops that pass; host nodes it already created are never attached.

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::commit::{CommitSummary, commit_root};
use super::fiber::{Fiber, FiberArena, FiberId, link_children};
use super::materialize::materialize;
use crate::element::{Child, Element};
use crate::error::{RenderError, Result};
use crate::host::HostDocument;
use crate::pipeline::{IdleDeadline, Unbounded};
use crate::types::FiberFlags;

/// Default remaining time below which a batch yields.
pub const DEFAULT_YIELD_THRESHOLD: Duration = Duration::from_millis(1);

// =============================================================================
// Status & Stats
// =============================================================================

/// Outcome of one [`WorkLoop::resume`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStatus {
    /// No pass in flight.
    Idle,
    /// The budget ran out with units of work left.
    Pending,
    /// The pass finished and was committed during this batch.
    Committed(CommitSummary),
}

impl WorkStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, WorkStatus::Pending)
    }
}

/// Counters kept across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkStats {
    pub units: u64,
    pub batches: u64,
    pub commits: u64,
    /// Passes dropped by a newer `render` before they committed.
    pub abandoned: u64,
}

// =============================================================================
// Work Loop
// =============================================================================

/// Scheduler context for one host.
#[derive(Debug)]
pub struct WorkLoop<N> {
    arena: FiberArena<N>,
    wip_root: Option<FiberId>,
    next_unit: Option<FiberId>,
    yield_threshold: Duration,
    stats: WorkStats,
}

impl<N> Default for WorkLoop<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> WorkLoop<N> {
    pub fn new() -> Self {
        Self::with_yield_threshold(DEFAULT_YIELD_THRESHOLD)
    }

    pub fn with_yield_threshold(yield_threshold: Duration) -> Self {
        Self {
            arena: FiberArena::new(),
            wip_root: None,
            next_unit: None,
            yield_threshold,
            stats: WorkStats::default(),
        }
    }

    /// Start a pass rendering `element` into `container`.
    ///
    /// The root fiber already holds `container` as its node, its only child is
    /// `element`. It becomes both the work-in-progress root and the next unit.
    pub fn render(&mut self, element: Element, container: N) {
        if self.wip_root.is_some() {
            warn!(
                fibers = self.arena.len(),
                materialized = self.arena.materialized_count(),
                "render pass replaced before commit"
            );
            self.stats.abandoned += 1;
        }

        self.arena.clear();
        let root = self
            .arena
            .insert(Fiber::root(container, vec![Child::Element(element)]));
        self.wip_root = Some(root);
        self.next_unit = Some(root);
        debug!("render pass started");
    }

    /// Perform one unit of work on `id` and return the next one.
    ///
    /// 1. materialize the host node unless the fiber already has one
    /// 2. link child fibers
    /// 3. pick the next fiber in pre-order (`None` when the tree is done)
    pub fn perform_unit_of_work<D>(&mut self, doc: &mut D, id: FiberId) -> Result<Option<FiberId>>
    where
        D: HostDocument<Node = N>,
    {
        let fiber = self
            .arena
            .get_mut(id)
            .ok_or(RenderError::UnknownFiber(id.0))?;

        if !fiber.is_materialized() {
            let node = materialize(doc, &fiber.kind, &fiber.attributes)?;
            fiber.node = Some(node);
            fiber.flags.insert(FiberFlags::MATERIALIZED);
        }

        let linked = link_children(&mut self.arena, id);
        self.stats.units += 1;
        trace!(fiber = %id, children = linked, "unit of work");

        Ok(self.arena.next_in_preorder(id))
    }

    /// Run one batch: perform units of work until none are left or the deadline
    /// says to yield. A finished pass is committed before returning.
    ///
    /// On error the failing unit stays scheduled, so the next batch retries it.
    pub fn resume<D>(&mut self, doc: &mut D, deadline: &mut impl IdleDeadline) -> Result<WorkStatus>
    where
        D: HostDocument<Node = N>,
    {
        self.resume_with_threshold(doc, deadline, self.yield_threshold)
    }

    /// [`resume`](Self::resume), yielding once less than `threshold` remains
    /// instead of this loop's own threshold.
    pub fn resume_with_threshold<D>(
        &mut self,
        doc: &mut D,
        deadline: &mut impl IdleDeadline,
        threshold: Duration,
    ) -> Result<WorkStatus>
    where
        D: HostDocument<Node = N>,
    {
        self.stats.batches += 1;
        let mut performed = 0usize;

        while let Some(unit) = self.next_unit {
            self.next_unit = self.perform_unit_of_work(doc, unit)?;
            performed += 1;
            if deadline.should_yield(threshold) {
                break;
            }
        }
        trace!(performed, pending = self.next_unit.is_some(), "batch");

        if self.next_unit.is_some() {
            return Ok(WorkStatus::Pending);
        }

        let Some(root) = self.wip_root else {
            return Ok(WorkStatus::Idle);
        };

        let summary = commit_root(&mut self.arena, doc, root)?;
        self.wip_root = None;
        self.stats.commits += 1;
        debug!(fibers = self.arena.len(), "render pass committed");
        self.arena.clear();

        Ok(WorkStatus::Committed(summary))
    }

    /// Finish the pass in flight without yielding.
    pub fn flush<D>(&mut self, doc: &mut D) -> Result<Option<CommitSummary>>
    where
        D: HostDocument<Node = N>,
    {
        match self.resume(doc, &mut Unbounded)? {
            WorkStatus::Committed(summary) => Ok(Some(summary)),
            WorkStatus::Idle | WorkStatus::Pending => Ok(None),
        }
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// True when no pass is in flight.
    pub fn is_idle(&self) -> bool {
        self.wip_root.is_none()
    }

    pub fn wip_root(&self) -> Option<FiberId> {
        self.wip_root
    }

    pub fn next_unit(&self) -> Option<FiberId> {
        self.next_unit
    }

    /// Fibers of the pass in flight (empty once committed).
    pub fn arena(&self) -> &FiberArena<N> {
        &self.arena
    }

    pub fn stats(&self) -> WorkStats {
        self.stats
    }

    pub fn yield_threshold(&self) -> Duration {
        self.yield_threshold
    }
}
