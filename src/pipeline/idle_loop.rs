//! Idle loop - Host integration that keeps re-invoking the scheduler.
//!
//! In a browser the scheduler re-requests an idle callback after every batch,
//! forever. [`IdleLoop`] plays that role for hosts without one: it runs a batch,
//! waits for the next idle window, and repeats until stopped.
//!
//! # Example
//!
//! ```ignore
//! let idle = IdleLoop::new(SchedulerConfig::default());
//!
//! renderer.render(app(), container);
//!
//! // Option 1: blocking loop, stopped from a listener or another thread
//! idle.run(&mut renderer);
//!
//! // Option 2: tick manually from your own loop
//! while idle.tick(&mut renderer)?.is_pending() {}
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::error;

use super::config::SchedulerConfig;
use super::renderer::Renderer;
use crate::error::Result;
use crate::host::HostDocument;
use crate::reconciler::{CommitSummary, WorkStatus};

/// Drives a [`Renderer`] batch by batch.
pub struct IdleLoop {
    config: SchedulerConfig,
    running: Arc<AtomicBool>,
}

impl IdleLoop {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask [`run`](Self::run) to return after the current batch.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Shared flag; storing `false` stops the loop from elsewhere.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// Run one batch with this loop's frame budget and yield threshold.
    ///
    /// The renderer's own config only applies to [`Renderer::tick`].
    pub fn tick<D: HostDocument>(&self, renderer: &mut Renderer<D>) -> Result<WorkStatus> {
        renderer.tick_with(&self.config)
    }

    /// Run batches until [`stop`](Self::stop) is called.
    ///
    /// A failing batch is logged and the loop carries on with the next idle
    /// window, so a persistent host fault fails every batch the same way.
    /// Returns the number of failed batches.
    pub fn run<D: HostDocument>(&self, renderer: &mut Renderer<D>) -> usize {
        let mut failures = 0;
        while self.is_running() {
            if let Err(err) = self.tick(renderer) {
                failures += 1;
                error!(error = %err, failures, "render batch failed");
            }
            if !self.config.idle_interval.is_zero() {
                thread::sleep(self.config.idle_interval);
            }
        }
        failures
    }

    /// Run batches back to back until the pass in flight commits.
    ///
    /// Returns `None` when there was nothing to render. Errors stop the loop.
    pub fn run_until_committed<D: HostDocument>(
        &self,
        renderer: &mut Renderer<D>,
    ) -> Result<Option<CommitSummary>> {
        loop {
            match self.tick(renderer)? {
                WorkStatus::Committed(summary) => return Ok(Some(summary)),
                WorkStatus::Idle => return Ok(None),
                WorkStatus::Pending => continue,
            }
        }
    }
}

impl Default for IdleLoop {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
