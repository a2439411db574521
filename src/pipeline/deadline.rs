//! Idle deadlines - How much time the host grants a batch of work.
//!
//! The scheduler asks after every unit of work whether it should give control
//! back. Browsers answer with `IdleDeadline.timeRemaining()`; here any type
//! implementing [`IdleDeadline`] can answer.

use std::time::{Duration, Instant};

/// Remaining budget of the current idle window.
pub trait IdleDeadline {
    /// Time left in this window.
    fn time_remaining(&self) -> Duration;

    /// Called after each unit of work. Returns `true` when the batch must end.
    fn should_yield(&mut self, threshold: Duration) -> bool {
        self.time_remaining() < threshold
    }
}

/// Wall-clock deadline ending at a fixed instant.
///
/// `end` is `None` when the budget reaches past what `Instant` can represent;
/// such a window never runs out.
#[derive(Debug, Clone, Copy)]
pub struct TimeDeadline {
    end: Option<Instant>,
}

impl TimeDeadline {
    pub fn new(end: Instant) -> Self {
        Self { end: Some(end) }
    }

    /// A window of `budget` starting now. `Duration::MAX` means no limit.
    pub fn after(budget: Duration) -> Self {
        Self {
            end: Instant::now().checked_add(budget),
        }
    }
}

impl IdleDeadline for TimeDeadline {
    fn time_remaining(&self) -> Duration {
        match self.end {
            Some(end) => end.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }
}

/// Deadline that allows exactly `units` units of work, whatever they cost.
///
/// Deterministic, so tests and lockstep hosts use it in place of the clock.
#[derive(Debug, Clone, Copy)]
pub struct UnitBudget {
    remaining: usize,
}

impl UnitBudget {
    pub fn new(units: usize) -> Self {
        Self { remaining: units }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl IdleDeadline for UnitBudget {
    fn time_remaining(&self) -> Duration {
        if self.remaining > 0 {
            Duration::MAX
        } else {
            Duration::ZERO
        }
    }

    fn should_yield(&mut self, _threshold: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// Never yields. Used to flush a pass synchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl IdleDeadline for Unbounded {
    fn time_remaining(&self) -> Duration {
        Duration::MAX
    }

    fn should_yield(&mut self, _threshold: Duration) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_budget_counts_down() {
        let mut budget = UnitBudget::new(2);
        assert!(!budget.should_yield(Duration::from_millis(1)));
        assert!(budget.should_yield(Duration::from_millis(1)));
        assert_eq!(budget.time_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_time_deadline_expires() {
        let deadline = TimeDeadline::new(Instant::now());
        assert_eq!(deadline.time_remaining(), Duration::ZERO);

        let mut later = TimeDeadline::after(Duration::from_secs(60));
        assert!(!later.should_yield(Duration::from_millis(1)));
    }

    #[test]
    fn test_time_deadline_saturates_on_huge_budget() {
        let mut deadline = TimeDeadline::after(Duration::MAX);
        assert_eq!(deadline.time_remaining(), Duration::MAX);
        assert!(!deadline.should_yield(Duration::from_secs(1)));
    }

    #[test]
    fn test_unbounded_never_yields() {
        let mut deadline = Unbounded;
        for _ in 0..1000 {
            assert!(!deadline.should_yield(Duration::from_secs(1)));
        }
    }
}
