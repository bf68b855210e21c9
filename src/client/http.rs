//! Request Client Module
//!
//! Wraps outbound calls to the registry endpoint with a wall-clock timeout
//! and a bounded retry/backoff loop. The client is cheap to clone:
//! `reqwest::Client` shares its connection pool internally.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{ClientConfig, ENDPOINT_PLACEHOLDER};
use crate::error::{RegistryError, Result};
use crate::models::{ApiRequest, ApiResponse};

// == Request Client ==
/// HTTP client for the action-multiplexed registry endpoint.
#[derive(Debug, Clone)]
pub struct RequestClient {
    client: reqwest::Client,
    endpoint: String,
    retries: u32,
}

impl RequestClient {
    /// Creates a new client from configuration.
    ///
    /// The timeout is enforced by reqwest per request; an elapsed budget
    /// aborts the in-flight call.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RegistryError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint_url.clone(),
            retries: config.request_retries,
        })
    }

    // == Request ==
    /// Issues `payload` as a JSON POST, retrying transient failures.
    ///
    /// - An unconfigured endpoint fails fast with `NotConfigured`; no network
    ///   I/O is attempted.
    /// - A timeout is terminal for the whole call chain.
    /// - Transport and non-2xx failures are retried with waits of 1 s, 2 s,
    ///   3 s; once the budget is exhausted the last error propagates.
    pub async fn request(&self, payload: &ApiRequest) -> Result<ApiResponse> {
        if self.endpoint.contains(ENDPOINT_PLACEHOLDER) {
            return Err(RegistryError::NotConfigured);
        }

        let mut remaining = self.retries;
        loop {
            match self.attempt(payload).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retryable() && remaining > 0 => {
                    let backoff_ms = 1000 * u64::from(self.retries - remaining + 1);
                    warn!(
                        error = %err,
                        remaining,
                        backoff_ms,
                        "request failed, backing off before retry"
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    remaining -= 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, payload: &ApiRequest) -> Result<ApiResponse> {
        debug!(endpoint = %self.endpoint, "issuing registry request");
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::from_status(status, &body));
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(RegistryError::from)
    }
}
