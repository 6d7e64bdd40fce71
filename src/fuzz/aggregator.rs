use rustc_hash::FxHashMap;

use crate::core::error::{AfuzzError, Result};
use crate::core::types::{Outcome, Report};

/// Folds index-tagged outcomes into a [`Report`] in candidate order.
///
/// Outcomes may be pushed in any order. Successful URLs are released as soon
/// as every earlier candidate has resolved, which lets callers write results
/// incrementally while keeping submission order.
#[derive(Debug)]
pub struct OrderedAggregator {
    total: usize,
    next: usize,
    pending: FxHashMap<usize, Outcome>,
    urls: Vec<String>,
}

impl OrderedAggregator {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            next: 0,
            pending: FxHashMap::default(),
            urls: Vec::new(),
        }
    }

    /// Record one outcome and return the successful URLs that became
    /// releasable, in candidate order.
    pub fn push(&mut self, index: usize, outcome: Outcome) -> Result<Vec<String>> {
        if index >= self.total {
            return Err(AfuzzError::Aggregation(format!(
                "Outcome index {index} is out of range for {} candidate(s)",
                self.total
            )));
        }
        if index < self.next || self.pending.contains_key(&index) {
            return Err(AfuzzError::Aggregation(format!(
                "Received a second outcome for candidate {index}"
            )));
        }

        self.pending.insert(index, outcome);

        let mut released = Vec::new();
        while let Some(outcome) = self.pending.remove(&self.next) {
            if outcome.is_success() {
                let url = outcome.url().to_string();
                self.urls.push(url.clone());
                released.push(url);
            }
            self.next += 1;
        }

        Ok(released)
    }

    /// Number of outcomes resolved in candidate order so far.
    pub fn resolved(&self) -> usize {
        self.next
    }

    pub fn success_count(&self) -> usize {
        self.urls.len()
    }

    /// Finish aggregation, failing if any candidate is still missing an outcome.
    pub fn finish(self) -> Result<Report> {
        if self.next != self.total {
            return Err(AfuzzError::Aggregation(format!(
                "Only {} of {} candidate(s) produced an outcome",
                self.next + self.pending.len(),
                self.total
            )));
        }

        Ok(Report::new(self.urls, self.total))
    }
}

/// Aggregate a complete set of outcomes in one pass.
///
/// The indexes must be exactly `0..outcomes.len()`, in any order.
pub fn aggregate(outcomes: Vec<(usize, Outcome)>) -> Result<Report> {
    let mut aggregator = OrderedAggregator::new(outcomes.len());
    for (index, outcome) in outcomes {
        aggregator.push(index, outcome)?;
    }
    aggregator.finish()
}
