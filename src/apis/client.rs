/// Base HTTP client with rate limiting
use crate::errors::{ApiError, CheckError};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};

const USER_AGENT: &str = concat!("superchain-check/", env!("CARGO_PKG_VERSION"));

/// Rate limiter for API clients
///
/// Allows one request in flight and spaces request starts at least
/// `60 / max_per_minute` seconds apart.
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    last_request: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(max_per_minute: usize) -> Self {
        let min_interval = if max_per_minute > 0 {
            Duration::from_secs_f64(60.0 / max_per_minute as f64)
        } else {
            Duration::ZERO
        };

        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            last_request: Arc::new(Mutex::new(None)),
            min_interval,
        }
    }

    /// Wait until we can make a request
    pub async fn acquire(&self) -> Result<RateLimitGuard, ApiError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ApiError::RateLimiter(e.to_string()))?;

        if !self.min_interval.is_zero() {
            let last = self.last_request.lock().await;
            let wait = (*last)
                .map(|last_time| self.min_interval.saturating_sub(last_time.elapsed()))
                .unwrap_or(Duration::ZERO);
            drop(last);

            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            *self.last_request.lock().await = Some(Instant::now());
        }

        Ok(RateLimitGuard { _permit: permit })
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// RAII guard returned by [`RateLimiter::acquire`]
pub struct RateLimitGuard {
    _permit: OwnedSemaphorePermit,
}

/// HTTP client wrapper with a fixed request timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, CheckError> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CheckError::Http(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
