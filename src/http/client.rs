//! HTTP client with retry and rate limiting
//!
//! Every GET against the documentation source goes through here:
//! - the token bucket is awaited before each attempt
//! - 429 responses honour `Retry-After`
//! - 5xx, timeouts and connect errors are retried with backoff
//! - other client errors fail immediately with the response body

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    /// Upper bound for any single backoff delay
    pub max_backoff: Duration,
    pub backoff_type: BackoffType,
    /// Token bucket settings, `None` disables limiting
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: BTreeMap::new(),
            user_agent: format!("doc2struct/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `Authorization: token <token>` with every request. An empty
    /// token leaves requests anonymous.
    pub fn token(self, token: &str) -> Self {
        if token.is_empty() {
            self
        } else {
            self.header("Authorization", format!("token {token}"))
        }
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// What one attempt at a request came to
enum Attempt {
    Done(Response),
    Retry { delay: Duration, error: Error },
    Fail(Error),
}

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client from its configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// GET a URL, retrying transient failures.
    ///
    /// Once retries run out the error of the last attempt is returned.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;

        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            match self.attempt(url, attempt).await {
                Attempt::Done(response) => {
                    debug!("GET {} -> {}", url, response.status());
                    return Ok(response);
                }
                Attempt::Fail(error) => return Err(error),
                Attempt::Retry { error, .. } if attempt >= self.config.max_retries => {
                    return Err(error);
                }
                Attempt::Retry { delay, error } => {
                    warn!(
                        "GET {} failed ({}), attempt {}/{}, retrying in {:?}",
                        url,
                        error,
                        attempt + 1,
                        self.config.max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// GET a URL and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        Ok(response.json().await?)
    }

    async fn attempt(&self, url: &str, attempt: u32) -> Attempt {
        let mut request = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        match request.send().await {
            Ok(response) => self.classify(response, attempt).await,
            Err(e) if e.is_timeout() => Attempt::Retry {
                delay: self.calculate_backoff(attempt),
                error: Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                },
            },
            Err(e) if e.is_connect() => Attempt::Retry {
                delay: self.calculate_backoff(attempt),
                error: Error::Http(e),
            },
            Err(e) => Attempt::Fail(Error::Http(e)),
        }
    }

    async fn classify(&self, response: Response, attempt: u32) -> Attempt {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = extract_retry_after(&response);
            return Attempt::Retry {
                delay: Duration::from_secs(retry_after),
                error: Error::RateLimited {
                    retry_after_seconds: retry_after,
                },
            };
        }

        if !status.is_client_error() && !status.is_server_error() {
            return Attempt::Done(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = Error::http_status(status.as_u16(), body);
        if is_retryable_status(status) {
            Attempt::Retry {
                delay: self.calculate_backoff(attempt),
                error,
            }
        } else {
            Attempt::Fail(error)
        }
    }

    /// Backoff delay before retry number `attempt + 1`
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("max_retries", &self.config.max_retries)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// 5xx responses worth another attempt, Cloudflare's 52x included
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status.as_u16(),
        500 | 502 | 503 | 504 | 520 | 521 | 522 | 523 | 524
    )
}

/// `Retry-After` in seconds, 60 when absent or unparseable
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
