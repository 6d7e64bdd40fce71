use futures::stream::{self, BoxStream};
use futures::StreamExt;
use std::time::Duration;

use crate::config::Config;
use crate::core::constants::{defaults, timeouts};
use crate::core::types::{Mode, Outcome, Probe};
use crate::fuzz::executor::ExecuteRequest;
use crate::fuzz::url_builder::Template;

/// Per-run scheduling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    pub mode: Mode,
    /// Upper bound of in-flight probes in bounded-parallel mode
    pub concurrency: usize,
    /// Timeout applied to every single request
    pub timeout: Duration,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            concurrency: defaults::CONCURRENCY,
            timeout: Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl DispatchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.mode(),
            concurrency: config.concurrency_limit(),
            timeout: config.timeout_duration(),
        }
    }

    /// Number of probes allowed in flight at once for the configured mode.
    pub fn effective_concurrency(&self) -> usize {
        match self.mode {
            Mode::Sequential => 1,
            Mode::BoundedParallel => self.concurrency.max(1),
        }
    }
}

/// Fans candidates out to a request executor and yields index-tagged outcomes.
///
/// Every candidate is probed exactly once. A failed probe is just another
/// outcome, so it never cancels or delays its siblings.
#[derive(Debug)]
pub struct Dispatcher<E> {
    executor: E,
    options: DispatchOptions,
}

impl<E: ExecuteRequest> Dispatcher<E> {
    pub fn new(executor: E, options: DispatchOptions) -> Self {
        Self { executor, options }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Build one probe per candidate, tagged with the candidate's index.
    pub fn probes(template: &Template, candidates: &[String]) -> Vec<Probe> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| Probe::new(index, template.build(candidate)))
            .collect()
    }

    /// Stream outcomes as probes complete.
    ///
    /// In sequential mode items arrive in candidate order. In bounded-parallel
    /// mode they arrive in completion order and the index must be used to
    /// restore candidate order.
    pub fn dispatch<'a>(
        &'a self,
        template: &Template,
        candidates: &[String],
    ) -> BoxStream<'a, (usize, Outcome)> {
        let probes = Self::probes(template, candidates);
        let timeout = self.options.timeout;

        match self.options.mode {
            Mode::Sequential => stream::iter(probes)
                .then(move |probe| self.execute_probe(probe, timeout))
                .boxed(),
            Mode::BoundedParallel => stream::iter(probes)
                .map(move |probe| self.execute_probe(probe, timeout))
                .buffer_unordered(self.options.effective_concurrency())
                .boxed(),
        }
    }

    /// Run every probe and collect the outcomes in completion order.
    pub async fn run(&self, template: &Template, candidates: &[String]) -> Vec<(usize, Outcome)> {
        self.dispatch(template, candidates).collect().await
    }

    async fn execute_probe(&self, probe: Probe, timeout: Duration) -> (usize, Outcome) {
        let outcome = self.executor.execute(&probe.url, timeout).await;
        (probe.index, outcome)
    }
}
