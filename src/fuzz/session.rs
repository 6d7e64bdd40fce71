use futures::StreamExt;
use std::time::Instant;

use crate::core::error::Result;
use crate::core::types::{Outcome, Report};
use crate::fuzz::aggregator::OrderedAggregator;
use crate::fuzz::dispatcher::Dispatcher;
use crate::fuzz::executor::ExecuteRequest;
use crate::fuzz::url_builder::Template;
use crate::reporting::logging;

/// Consumer of a run's results (console, output file, progress bar, ...).
pub trait ResultSink {
    /// Called once per probe, in completion order.
    fn probe_completed(&mut self, _index: usize, _outcome: &Outcome) {}

    /// Called once per successful URL, in candidate order.
    fn success(&mut self, url: &str) -> Result<()>;

    /// Called once after every probe has resolved.
    fn finish(&mut self, report: &Report) -> Result<()>;
}

/// Probe every candidate and stream successes to `sinks` in candidate order.
///
/// Per-probe failures never end the run. Errors come only from the sinks
/// themselves or from a broken aggregation invariant.
pub async fn run_session<E: ExecuteRequest>(
    dispatcher: &Dispatcher<E>,
    template: &Template,
    candidates: &[String],
    sinks: &mut [&mut dyn ResultSink],
) -> Result<Report> {
    let started = Instant::now();
    logging::log_dispatch_start(candidates.len(), dispatcher.options());

    let mut aggregator = OrderedAggregator::new(candidates.len());
    let mut outcomes = dispatcher.dispatch(template, candidates);

    while let Some((index, outcome)) = outcomes.next().await {
        logging::log_probe_outcome(index, &outcome);
        for sink in sinks.iter_mut() {
            sink.probe_completed(index, &outcome);
        }

        for url in aggregator.push(index, outcome)? {
            for sink in sinks.iter_mut() {
                sink.success(&url)?;
            }
        }
    }

    let report = aggregator.finish()?;
    logging::log_dispatch_complete(&report, started.elapsed().as_millis());

    for sink in sinks.iter_mut() {
        sink.finish(&report)?;
    }

    Ok(report)
}

/// Validate the template, then probe every candidate.
///
/// The template is checked before anything is sent, so a template without
/// its marker issues zero requests.
pub async fn fuzz<E: ExecuteRequest>(
    dispatcher: &Dispatcher<E>,
    template: &str,
    marker: &str,
    candidates: &[String],
    sinks: &mut [&mut dyn ResultSink],
) -> Result<Report> {
    let template = Template::new(template, marker)?;
    run_session(dispatcher, &template, candidates, sinks).await
}
