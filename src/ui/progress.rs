use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::core::error::Result;
use crate::core::types::{Outcome, Report};
use crate::fuzz::session::ResultSink;

/// Progress bar on stderr counting completed probes.
pub struct ProgressReporter {
    probe_progress: Option<ProgressBar>,
    completed: u64,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            probe_progress: None,
            completed: 0,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_probing(&mut self, total_probes: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::with_draw_target(
            Some(total_probes as u64),
            ProgressDrawTarget::stderr(),
        );
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} probes ({eta})",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.enable_steady_tick(Duration::from_millis(120));
        self.probe_progress = Some(pb);
    }

    /// Handle to the live bar, for writers that must not collide with it.
    pub fn bar(&self) -> Option<ProgressBar> {
        self.probe_progress.clone()
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn finish_probing(&self, success_count: usize, total_count: usize) {
        if let Some(ref pb) = self.probe_progress {
            pb.finish_and_clear();
            log::debug!("Progress finished: {success_count}/{total_count} successful");
        }
    }
}

impl ResultSink for ProgressReporter {
    fn probe_completed(&mut self, _index: usize, _outcome: &Outcome) {
        self.completed += 1;
        if let Some(ref pb) = self.probe_progress {
            pb.set_position(self.completed);
        }
    }

    fn success(&mut self, _url: &str) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, report: &Report) -> Result<()> {
        self.finish_probing(report.count(), report.attempted());
        Ok(())
    }
}
