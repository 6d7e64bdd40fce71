use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{FailureKind, Outcome};

/// Performs a single HTTP probe.
///
/// Implementations must never panic or return an error for a bad target:
/// every problem is reported as [`Outcome::Failure`] so one candidate cannot
/// abort the batch.
#[async_trait]
pub trait ExecuteRequest: Send + Sync {
    async fn execute(&self, url: &str, timeout: Duration) -> Outcome;
}

/// Request executor backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    /// Build an executor with an optional custom User-Agent.
    ///
    /// Redirects are not followed: a 3xx answer is reported with its own
    /// status and is therefore never counted as a discovered endpoint.
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let redirect_policy = Policy::none();
        let user_agent = user_agent.unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .redirect(redirect_policy)
            .user_agent(user_agent)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.user_agent.as_deref())
    }
}

#[async_trait]
impl ExecuteRequest for HttpExecutor {
    async fn execute(&self, url: &str, timeout: Duration) -> Outcome {
        match self.client.get(url).timeout(timeout).send().await {
            Ok(response) => Outcome::success(url, response.status().as_u16()),
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                Outcome::failure(url, classify_error(&err), description)
            }
        }
    }
}

/// Map a `reqwest` error onto the coarse failure taxonomy.
pub fn classify_error(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_builder() {
        FailureKind::InvalidUrl
    } else if err.is_connect() {
        FailureKind::Connect
    } else if err.is_request()
        || err.is_redirect()
        || err.is_body()
        || err.is_decode()
        || err.is_status()
    {
        FailureKind::Protocol
    } else {
        FailureKind::Other
    }
}
