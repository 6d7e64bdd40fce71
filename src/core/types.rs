use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::constants::{http_status, modes};
use crate::core::error::AfuzzError;

/// Scheduling policy used by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One probe at a time, in candidate order.
    #[default]
    Sequential,
    /// Up to a configured number of probes in flight at once.
    BoundedParallel,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Sequential => modes::SEQUENTIAL,
            Mode::BoundedParallel => modes::BOUNDED_PARALLEL,
        }
    }
}

impl FromStr for Mode {
    type Err = AfuzzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            modes::SEQUENTIAL | modes::SYNC => Ok(Mode::Sequential),
            modes::BOUNDED_PARALLEL | modes::ASYNC => Ok(Mode::BoundedParallel),
            other => Err(AfuzzError::InvalidArgument(format!(
                "Unknown mode '{other}'. Expected one of: {}.",
                modes::ALL.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete request to perform: the built URL and the index of the
/// candidate it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub index: usize,
    pub url: String,
}

impl Probe {
    pub fn new(index: usize, url: String) -> Self {
        Self { index, url }
    }
}

/// Why a probe did not produce an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The per-request timeout expired
    Timeout,
    /// Connection refused, DNS failure or another connect-level error
    Connect,
    /// The URL could not be parsed or used to build a request
    InvalidUrl,
    /// Request, response, redirect or decoding failure after connecting
    Protocol,
    /// Anything not covered above
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connection error",
            FailureKind::InvalidUrl => "invalid url",
            FailureKind::Protocol => "protocol error",
            FailureKind::Other => "error",
        };
        f.write_str(name)
    }
}

/// Result of executing a single probe.
///
/// A response of any status is a `Success` here; deciding which statuses
/// count towards the report is left to [`Outcome::is_success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        url: String,
        status: u16,
    },
    Failure {
        url: String,
        kind: FailureKind,
        description: String,
    },
}

impl Outcome {
    pub fn success(url: impl Into<String>, status: u16) -> Self {
        Outcome::Success {
            url: url.into(),
            status,
        }
    }

    pub fn failure(
        url: impl Into<String>,
        kind: FailureKind,
        description: impl Into<String>,
    ) -> Self {
        Outcome::Failure {
            url: url.into(),
            kind,
            description: description.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Outcome::Success { url, .. } | Outcome::Failure { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. } => Some(*status),
            Outcome::Failure { .. } => None,
        }
    }

    /// Check if this outcome counts as a discovered endpoint.
    ///
    /// Only an exact HTTP 200 qualifies; redirects and other 2xx codes do not.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { status, .. } if *status == http_status::OK)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Success { url, status } => write!(f, "{status} - {url}"),
            Outcome::Failure {
                url,
                kind,
                description,
            } => write!(f, "{url} - {kind}: {description}"),
        }
    }
}

/// Final result of a run: successful URLs in candidate order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    urls: Vec<String>,
    count: usize,
    attempted: usize,
}

impl Report {
    /// Create a report from successful URLs already in candidate order.
    ///
    /// # Examples
    /// ```
    /// use afuzz::Report;
    ///
    /// let report = Report::new(vec!["https://example.com/admin".to_string()], 3);
    /// assert_eq!(report.count(), 1);
    /// assert_eq!(report.attempted(), 3);
    /// ```
    pub fn new(urls: Vec<String>, attempted: usize) -> Self {
        let count = urls.len();
        Self {
            urls,
            count,
            attempted,
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of probes that were executed, successful or not.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
