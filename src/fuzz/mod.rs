//! Request dispatch engine
//!
//! This module turns a URL template and a candidate list into index-tagged
//! probes, executes them sequentially or with bounded concurrency, and folds
//! the outcomes into an ordered report.

pub mod aggregator;
pub mod dispatcher;
pub mod executor;
pub mod session;
pub mod url_builder;

// Re-export commonly used items
pub use aggregator::{OrderedAggregator, aggregate};
pub use dispatcher::{DispatchOptions, Dispatcher};
pub use executor::{ExecuteRequest, HttpExecutor};
pub use session::{ResultSink, fuzz, run_session};
pub use url_builder::{Template, build};
