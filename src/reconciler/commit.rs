//! Commit phase - Attach a finished work tree to the host in one pass.
//!
//! Runs to completion without yielding. A half-attached tree would be visible,
//! so this is the one step of a render pass that cannot be interrupted.

use tracing::debug;

use super::fiber::{FiberArena, FiberId};
use crate::error::{RenderError, Result};
use crate::host::HostDocument;
use crate::types::FiberFlags;

/// What a commit attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitSummary {
    /// Host nodes appended to their parent.
    pub attached: usize,
    /// Of those, nodes appended directly to the container.
    pub top_level: usize,
}

/// Append every materialized node below `root` to its parent's node.
///
/// Visits fibers in pre-order starting at `root`'s first child: a node is
/// appended, then its children, then its later siblings. Host errors stop the
/// pass and propagate.
pub fn commit_root<D: HostDocument>(
    arena: &mut FiberArena<D::Node>,
    doc: &mut D,
    root: FiberId,
) -> Result<CommitSummary> {
    let mut summary = CommitSummary::default();
    let mut cursor = arena
        .get(root)
        .ok_or(RenderError::UnknownFiber(root.0))?
        .child;

    while let Some(id) = cursor {
        let fiber = arena.get(id).ok_or(RenderError::UnknownFiber(id.0))?;
        let parent_id = fiber.parent.ok_or(RenderError::Detached(id.0))?;
        let node = fiber.node.as_ref().ok_or(RenderError::MissingNode(id.0))?;
        let parent_node = arena
            .get(parent_id)
            .and_then(|p| p.node.as_ref())
            .ok_or(RenderError::MissingNode(parent_id.0))?;

        doc.append_child(parent_node, node)?;

        summary.attached += 1;
        if parent_id == root {
            summary.top_level += 1;
        }
        if let Some(fiber) = arena.get_mut(id) {
            fiber.flags.insert(FiberFlags::PLACED);
        }

        cursor = arena.next_in_preorder(id);
    }

    debug!(
        attached = summary.attached,
        top_level = summary.top_level,
        "commit"
    );
    Ok(summary)
}
