//! Renderer - A host document paired with its scheduler.
//!
//! The renderer is what a host integration holds on to: it owns the document,
//! the [`WorkLoop`] and a reactive commit counter. Effects that read
//! [`Renderer::commit_signal`] re-run every time a pass lands on the host.

use std::time::Duration;

use spark_signals::{Signal, signal};

use super::config::SchedulerConfig;
use super::deadline::{IdleDeadline, TimeDeadline};
use crate::element::Element;
use crate::error::Result;
use crate::host::HostDocument;
use crate::reconciler::{CommitSummary, WorkLoop, WorkStatus, render_immediate};

/// Document + scheduler + commit signal.
pub struct Renderer<D: HostDocument> {
    doc: D,
    work: WorkLoop<D::Node>,
    config: SchedulerConfig,
    commits: Signal<u64>,
}

impl<D: HostDocument> Renderer<D> {
    pub fn new(doc: D) -> Self {
        Self::with_config(doc, SchedulerConfig::default())
    }

    pub fn with_config(doc: D, config: SchedulerConfig) -> Self {
        Self {
            doc,
            work: WorkLoop::with_yield_threshold(config.yield_threshold),
            config,
            commits: signal(0),
        }
    }

    /// Schedule a pass rendering `element` into `container`.
    ///
    /// Returns immediately; the host changes once a later batch commits.
    pub fn render(&mut self, element: Element, container: D::Node) {
        self.work.render(element, container);
    }

    /// Render synchronously, bypassing the scheduler.
    pub fn render_immediate(&mut self, element: &Element, container: &D::Node) -> Result<usize> {
        let created = render_immediate(&mut self.doc, element, container)?;
        self.bump_commits();
        Ok(created)
    }

    /// Run one batch under `deadline`.
    pub fn resume(&mut self, deadline: &mut impl IdleDeadline) -> Result<WorkStatus> {
        let threshold = self.work.yield_threshold();
        self.resume_within(deadline, threshold)
    }

    /// Run one batch with the renderer's frame budget.
    pub fn tick(&mut self) -> Result<WorkStatus> {
        let config = self.config;
        self.tick_with(&config)
    }

    /// Run one batch with the frame budget and yield threshold of `config`.
    pub fn tick_with(&mut self, config: &SchedulerConfig) -> Result<WorkStatus> {
        let mut deadline = TimeDeadline::after(config.frame_budget);
        self.resume_within(&mut deadline, config.yield_threshold)
    }

    fn resume_within(
        &mut self,
        deadline: &mut impl IdleDeadline,
        threshold: Duration,
    ) -> Result<WorkStatus> {
        let status = self
            .work
            .resume_with_threshold(&mut self.doc, deadline, threshold)?;
        if let WorkStatus::Committed(_) = status {
            self.bump_commits();
        }
        Ok(status)
    }

    /// Finish the pass in flight without yielding.
    pub fn flush(&mut self) -> Result<Option<CommitSummary>> {
        let summary = self.work.flush(&mut self.doc)?;
        if summary.is_some() {
            self.bump_commits();
        }
        Ok(summary)
    }

    fn bump_commits(&self) {
        self.commits.set(self.commits.get() + 1);
    }

    /// Reactive count of passes committed so far.
    pub fn commit_signal(&self) -> Signal<u64> {
        self.commits.clone()
    }

    pub fn is_idle(&self) -> bool {
        self.work.is_idle()
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(self) -> D {
        self.doc
    }

    pub fn work_loop(&self) -> &WorkLoop<D::Node> {
        &self.work
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;
    use crate::pipeline::UnitBudget;

    #[test]
    fn test_commit_signal_counts_passes() {
        let mut doc = MemoryDocument::new();
        let container = doc.create_container();
        let mut renderer = Renderer::new(doc);
        let commits = renderer.commit_signal();

        renderer.render(crate::element!("p", "one"), container);
        assert_eq!(renderer.resume(&mut UnitBudget::new(1)).unwrap(), WorkStatus::Pending);
        assert_eq!(commits.get(), 0);

        renderer.flush().unwrap();
        assert_eq!(commits.get(), 1);

        renderer.render_immediate(&crate::element!("p", "two"), &container).unwrap();
        assert_eq!(commits.get(), 2);
        assert_eq!(
            renderer.document().inner_html(container),
            "<p>one</p><p>two</p>"
        );
    }

    #[test]
    fn test_tick_uses_frame_budget() {
        let mut doc = MemoryDocument::new();
        let container = doc.create_container();
        let mut renderer = Renderer::with_config(
            doc,
            SchedulerConfig::default().frame_budget(std::time::Duration::from_secs(5)),
        );

        renderer.render(crate::element!("span", "hi"), container);
        assert!(matches!(renderer.tick().unwrap(), WorkStatus::Committed(_)));
        assert!(renderer.is_idle());
        assert_eq!(renderer.tick().unwrap(), WorkStatus::Idle);
    }

    #[test]
    fn test_tick_with_unlimited_budget() {
        let mut doc = MemoryDocument::new();
        let container = doc.create_container();
        let mut renderer = Renderer::with_config(
            doc,
            SchedulerConfig::default().frame_budget(Duration::MAX),
        );

        renderer.render(crate::element!("ul", crate::element!("li", "a")), container);
        assert!(matches!(renderer.tick().unwrap(), WorkStatus::Committed(_)));
        assert_eq!(renderer.document().inner_html(container), "<ul><li>a</li></ul>");
    }
}
