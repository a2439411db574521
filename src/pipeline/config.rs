//! Scheduler configuration.

use std::time::Duration;

use crate::reconciler::DEFAULT_YIELD_THRESHOLD;

/// Longest idle period a browser grants a single idle callback.
pub const DEFAULT_FRAME_BUDGET: Duration = Duration::from_millis(50);

/// Pause between batches when the loop drives itself (~60fps).
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(16);

/// Timing knobs for the scheduler and the idle loop.
///
/// ```ignore
/// let config = SchedulerConfig {
///     frame_budget: Duration::from_millis(8),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Time granted to one batch of units of work (default: 50ms)
    pub frame_budget: Duration,
    /// Yield once less than this remains in the batch (default: 1ms)
    pub yield_threshold: Duration,
    /// Sleep between batches in [`IdleLoop::run`](super::IdleLoop::run) (default: 16ms)
    pub idle_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_budget: DEFAULT_FRAME_BUDGET,
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            idle_interval: DEFAULT_IDLE_INTERVAL,
        }
    }
}

impl SchedulerConfig {
    pub fn frame_budget(mut self, budget: Duration) -> Self {
        self.frame_budget = budget;
        self
    }

    pub fn yield_threshold(mut self, threshold: Duration) -> Self {
        self.yield_threshold = threshold;
        self
    }

    pub fn idle_interval(mut self, interval: Duration) -> Self {
        self.idle_interval = interval;
        self
    }
}
