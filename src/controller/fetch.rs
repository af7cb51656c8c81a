use async_trait::async_trait;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::error::ScrapeError;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Retrieves the markup behind a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// How many extra attempts an upstream call gets, and the pause before each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Runs `op` until it succeeds, fails for good, or retries run out.
///
/// # Errors
///
/// Will return the last error if every attempt fails, or the first
/// non-transient error
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, what: &str, mut op: F) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < policy.retries => {
                attempt += 1;
                warn!(target_url = what, attempt, error = %e, "retrying upstream request");
                tokio::time::sleep(policy.backoff).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// # Errors
///
/// Will return `Err` if the TLS backend cannot be initialised
pub fn build_client(timeout: Duration) -> Result<Client, ScrapeError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ScrapeError::Internal(format!("could not build http client: {e}")))
}

/// Logs the raw transport error and keeps only its classification.
pub fn upstream_error(url: &str, e: reqwest::Error) -> ScrapeError {
    warn!(target_url = url, error = %e, "upstream request failed");
    ScrapeError::from(e)
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    #[must_use]
    pub fn new(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        with_retry(self.retry, url, || async move {
            let resp = self
                .client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| upstream_error(url, e))?;
            resp.text().await.map_err(|e| upstream_error(url, e))
        })
        .await
    }
}
