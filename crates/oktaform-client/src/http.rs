//! HTTP client wrapper with rate-limit retry

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use oktaform_core::{OktaError, Result};

/// Upper bound on any single wait between retries
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Okta's rate-limit window reset, in epoch seconds
const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl HttpClient {
    pub fn new(timeout: Duration, max_retries: u32, retry_delay_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("oktaform/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OktaError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_retries,
            retry_delay_ms,
        })
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Execute a request, retrying on 429 and transport failures.
    ///
    /// Any other non-success status fails immediately with the status and body.
    pub async fn execute_with_retry(
        &self,
        request_builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let mut last_error = None;
        let mut reset_delay = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = reset_delay
                    .take()
                    .unwrap_or_else(|| backoff_delay(self.retry_delay_ms, attempt));
                warn!(
                    "Retrying Okta request (attempt {}/{}) in {}ms: {}",
                    attempt,
                    self.max_retries,
                    delay.as_millis(),
                    last_error.as_deref().unwrap_or_default()
                );
                tokio::time::sleep(delay).await;
            }

            let rb = request_builder.try_clone().ok_or_else(|| {
                OktaError::upstream("Request cannot be cloned for retry")
            })?;

            match rb.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        debug!("Okta responded {} for {}", status, response.url());
                        return Ok(response);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        reset_delay = rate_limit_reset_delay(response.headers(), Utc::now());
                        last_error = Some(format!("HTTP {}", status));
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(OktaError::http_status(
                        status.as_u16(),
                        format!("HTTP {} - {}", status, body),
                    ));
                }
                Err(e) => {
                    last_error = Some(e.to_string());
                }
            }
        }

        let last_error = last_error.unwrap_or_default();
        let status = last_error
            .starts_with("HTTP 429")
            .then_some(StatusCode::TOO_MANY_REQUESTS.as_u16());
        Err(OktaError::Upstream {
            status,
            message: format!(
                "Request failed after {} retries: {}",
                self.max_retries, last_error
            ),
        })
    }
}

/// Exponential backoff for the given retry attempt (1-based), capped at
/// [`MAX_RETRY_DELAY`]
pub(crate) fn backoff_delay(retry_delay_ms: u64, attempt: u32) -> Duration {
    let factor = 2u64
        .checked_pow(attempt.saturating_sub(1))
        .unwrap_or(u64::MAX);
    Duration::from_millis(retry_delay_ms.saturating_mul(factor)).min(MAX_RETRY_DELAY)
}

/// Time left until the rate-limit window named by `X-Rate-Limit-Reset`
/// resets, capped at [`MAX_RETRY_DELAY`]. A reset in the past means no wait.
pub(crate) fn rate_limit_reset_delay(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let reset = headers
        .get(RATE_LIMIT_RESET_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()?;
    let wait_secs = reset.saturating_sub(now.timestamp()).max(0) as u64;
    Some(Duration::from_secs(wait_secs).min(MAX_RETRY_DELAY))
}
