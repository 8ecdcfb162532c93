//! Reachability probe: one bounded GET per call

use std::time::Duration;

use reqwest::header::{HeaderValue, HOST, USER_AGENT};
use reqwest::{Client, Url};

/// Default per-probe timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 200;

/// Default Host header sent with every probe
pub const DEFAULT_HOST_HEADER: &str = "example.com";

/// Default User-Agent sent with every probe
pub const DEFAULT_USER_AGENT: &str = "Mozilla";

/// Result of a single probe. Timeouts, network errors and malformed targets are all `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

pub trait Probe {
    /// Attempt one request to `target`, giving up after `timeout`.
    async fn probe(&self, target: &str, timeout: Duration) -> Outcome;
}

/// HTTP probe. Only checks that a response arrived; status and body are never inspected.
#[derive(Debug)]
pub struct HttpProbe {
    client: Client,
    host: HeaderValue,
    user_agent: HeaderValue,
}

impl HttpProbe {
    pub fn new(host: &str, user_agent: &str) -> anyhow::Result<Self> {
        let host = HeaderValue::from_str(host)
            .map_err(|e| anyhow::anyhow!("Invalid Host header {:?}: {}", host, e))?;
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| anyhow::anyhow!("Invalid User-Agent {:?}: {}", user_agent, e))?;
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            client,
            host,
            user_agent,
        })
    }
}

impl Probe for HttpProbe {
    async fn probe(&self, target: &str, timeout: Duration) -> Outcome {
        let Some(url) = parse_target(target) else {
            tracing::debug!("Malformed target {:?}, probe failed", target);
            return Outcome::Failure;
        };

        tracing::debug!("Probing {} (timeout {} ms)", url, timeout.as_millis());
        let request = self
            .client
            .get(url)
            .header(HOST, self.host.clone())
            .header(USER_AGENT, self.user_agent.clone())
            .send();

        // Dropping the request future on timeout cancels the in-flight call.
        match tokio::time::timeout(timeout, request).await {
            Ok(Ok(_)) => {
                tracing::debug!("Probe: OK");
                Outcome::Success
            }
            Ok(Err(e)) => {
                tracing::debug!("Probe failed: {}", e);
                Outcome::Failure
            }
            Err(_) => {
                tracing::debug!("Probe timed out after {} ms", timeout.as_millis());
                Outcome::Failure
            }
        }
    }
}

/// Absolute http(s) URL, or `None`
fn parse_target(target: &str) -> Option<Url> {
    let url = Url::parse(target.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
