//! afuzz discovers live URL endpoints.
//!
//! Each wordlist candidate is substituted into a URL template, requested once
//! with a GET, and every URL answering exactly `200 OK` ends up in an ordered
//! [`Report`].
//!
//! ```no_run
//! use afuzz::fuzz::{DispatchOptions, Dispatcher, HttpExecutor, fuzz};
//!
//! # async fn example() -> afuzz::Result<()> {
//! let dispatcher = Dispatcher::new(HttpExecutor::new(None)?, DispatchOptions::default());
//! let candidates = vec!["admin".to_string(), "login".to_string()];
//! let report = fuzz(&dispatcher, "https://example.com/@", "@", &candidates, &mut []).await?;
//! println!("{} endpoint(s) found", report.count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod fuzz;
pub mod input;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::core::constants;
pub use crate::core::error::{AfuzzError, Result};
pub use crate::core::types::{FailureKind, Mode, Outcome, Probe, Report};
