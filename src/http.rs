//! Upstream HTTP access with timeout and linear-backoff retries

use crate::HorizonError;
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Shared JSON fetcher for the forecast and geocoding APIs
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    max_attempts: u32,
    backoff: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from the API settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("SeasonalHorizon/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_attempts: config.max_retries.max(1),
            backoff: config.backoff(),
        })
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Transport errors, 429 and 5xx responses are retried after
    /// `attempt * backoff`; any other non-success status fails at once.
    #[instrument(skip(self), fields(max_attempts = self.max_attempts))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request_start = Instant::now();
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                let wait = self.backoff * (attempt - 1);
                debug!("Retrying in {:.1}s", wait.as_secs_f64());
                tokio::time::sleep(wait).await;
            }

            debug!("Making HTTP request (attempt {}/{})", attempt, self.max_attempts);

            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .json::<T>()
                            .await
                            .with_context(|| "Failed to parse upstream response")?;
                        info!(
                            "Successful API request in {:.3}s (attempt {})",
                            request_start.elapsed().as_secs_f64(),
                            attempt
                        );
                        return Ok(body);
                    }
                    if !is_retryable(status) {
                        return Err(HorizonError::api(format!("Upstream returned HTTP {status}")).into());
                    }
                    warn!("Upstream returned HTTP {}, will retry", status);
                    last_error = Some(HorizonError::api(format!("Upstream returned HTTP {status}")));
                }
                Err(e) => {
                    warn!("HTTP request failed: {}", e);
                    last_error = Some(HorizonError::api(e.to_string()));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| HorizonError::api("No request attempted"))
            .into())
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_fetcher_respects_minimum_attempts() {
        let config = ApiConfig {
            max_retries: 0,
            ..ApiConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(fetcher.max_attempts, 1);
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_after_retries() {
        let config = ApiConfig {
            max_retries: 2,
            backoff_millis: 1,
            timeout_seconds: 1,
            ..ApiConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let result = fetcher
            .get_json::<serde_json::Value>("http://127.0.0.1:9/unreachable")
            .await;
        assert!(result.is_err());
    }
}
