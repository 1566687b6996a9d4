//! Pipeline observer — progress notifications at stage boundaries.
//!
//! Observers receive fire-and-forget callbacks when a stage starts and
//! when it completes, without coupling to stage logic. Use cases include
//! timing stages, progress display, and structured telemetry. The
//! orchestrator never consumes a return value from an observer, and final
//! data correctness must never depend on observer behavior.

use std::time::{Duration, Instant};

// Stage names, in execution order. Optional stages only notify when their
// flag is set; the contraction stage notifies twice per run.
pub const STAGE_ENTRY_FILTER: &str = "entry_filter";
pub const STAGE_PLATFORM: &str = "platform_cleanup";
pub const STAGE_CONTRACTIONS: &str = "contractions";
pub const STAGE_LOWERCASE: &str = "lowercase";
pub const STAGE_ACCENTS: &str = "accents";
pub const STAGE_PUNCTUATION: &str = "punctuation";
pub const STAGE_SYMBOLS: &str = "symbols";
pub const STAGE_STOPWORDS: &str = "stopwords";
pub const STAGE_MARKUP: &str = "markup";
pub const STAGE_STRUCTURAL: &str = "structural";
pub const STAGE_SPELLING: &str = "spelling";
pub const STAGE_NORMAL_FORM: &str = "normal_form";
pub const STAGE_WHITESPACE: &str = "whitespace";
pub const STAGE_EXIT_FILTER: &str = "exit_filter";
pub const STAGE_TRIM: &str = "trim";

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics attached to a stage-completion notification.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    records: Option<usize>,
    dropped: Option<usize>,
}

impl StageReport {
    /// Report carrying only elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            records: None,
            dropped: None,
        }
    }

    /// Time the stage took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records in the collection after the stage, if the stage reported it.
    pub fn records(&self) -> Option<usize> {
        self.records
    }

    /// Records dropped by the stage (filter stages only).
    pub fn dropped(&self) -> Option<usize> {
        self.dropped
    }
}

/// Builder for [`StageReport`]s with optional metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn records(mut self, count: usize) -> Self {
        self.report.records = Some(count);
        self
    }

    pub fn dropped(mut self, count: usize) -> Self {
        self.report.dropped = Some(count);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives stage-boundary notifications from the pipeline runner.
///
/// Both methods default to no-ops so an observer only implements the
/// callbacks it cares about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every notification. Zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects `(stage, report)` pairs in completion order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Stage names in completion order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Emits one `tracing` info event per completed stage.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::info!(
            stage,
            elapsed_us = report.elapsed().as_micros() as u64,
            records = ?report.records(),
            dropped = ?report.dropped(),
            "stage complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_sets_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(5))
            .records(10)
            .dropped(2)
            .build();
        assert_eq!(report.elapsed(), Duration::from_millis(5));
        assert_eq!(report.records(), Some(10));
        assert_eq!(report.dropped(), Some(2));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.records().is_none());
        assert!(report.dropped().is_none());
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_ENTRY_FILTER);
        obs.on_stage_end(STAGE_ENTRY_FILTER, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_TRIM, &StageReport::new(Duration::ZERO));
        assert_eq!(obs.stages(), vec![STAGE_ENTRY_FILTER, STAGE_TRIM]);
    }

    #[test]
    fn test_noop_observer_accepts_notifications() {
        let mut obs = NoopObserver;
        obs.on_stage_start(STAGE_MARKUP);
        obs.on_stage_end(STAGE_MARKUP, &StageReport::new(Duration::ZERO));
    }
}
