/// GoPlus Security API client for token and rug-pull analysis
///
/// API Documentation: https://docs.gopluslabs.io/
///
/// Endpoints implemented:
/// 1. /api/v1/token_security/{chain_id}?contract_addresses=... - Token security
/// 2. /api/v1/rugpull_detecting/{chain_id}?contract_addresses=... - Rug-pull detection
pub mod types;

pub use self::types::{
    AnalysisResult, FakeToken, Flag, GoPlusResponse, RugPullOwner, RugPullSecurity, TokenSecurity,
};

use self::types::SUCCESS_CODES;
use super::client::{HttpClient, RateLimiter};
use super::TokenAnalyzer;
use crate::errors::{ApiError, CheckError};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Instant;

// ============================================================================
// API CONFIGURATION - Hardcoded for GoPlus API
// ============================================================================

pub const GOPLUS_BASE_URL: &str = "https://api.gopluslabs.io/api/v1";

/// Request timeout in seconds
pub const TIMEOUT_SECS: u64 = 15;

/// Rate limit per minute - the free tier allows roughly 30 calls/min
pub const RATE_LIMIT_PER_MINUTE: usize = 30;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct GoPlusClient {
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl GoPlusClient {
    pub fn new(timeout_secs: u64, rate_limit_per_minute: usize) -> Result<Self, CheckError> {
        let http_client = HttpClient::new(timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_per_minute);

        logger::debug(
            LogTag::Api,
            &format!(
                "GoPlus client ready (timeout {}s, min request interval {}ms)",
                http_client.timeout().as_secs(),
                rate_limiter.min_interval().as_millis()
            ),
        );

        Ok(Self {
            http_client,
            rate_limiter,
            base_url: GOPLUS_BASE_URL.to_string(),
        })
    }

    /// Point the client at another deployment of the API
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint_url(&self, endpoint: &str, chain_id: &str, addresses: &[&str]) -> String {
        format!(
            "{}/{}/{}?contract_addresses={}",
            self.base_url,
            endpoint,
            chain_id,
            addresses.join(",")
        )
    }

    async fn execute_request(&self, url: &str, endpoint: &str) -> Result<reqwest::Response, ApiError> {
        let guard = self.rate_limiter.acquire().await?;

        logger::debug(LogTag::Api, &format!("{} GET {}", endpoint, url));

        let start = Instant::now();
        let response_result = self.http_client.client().get(url).send().await;
        drop(guard);
        let elapsed = start.elapsed().as_millis();

        match response_result {
            Ok(response) => {
                logger::debug(
                    LogTag::Api,
                    &format!("{} HTTP {} in {}ms", endpoint, response.status(), elapsed),
                );
                Ok(response)
            }
            Err(err) => {
                logger::warning(
                    LogTag::Api,
                    &format!("{} request failed after {}ms: {}", endpoint, elapsed, err),
                );
                Err(ApiError::from(err))
            }
        }
    }

    /// Fetch an endpoint and unwrap the GoPlus envelope
    async fn fetch_result<T>(&self, url: &str, endpoint: &str) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.execute_request(url, endpoint).await?;
        let status = response.status();
        let body = if status.is_success() {
            response.text().await.map_err(ApiError::from)?
        } else {
            response.text().await.unwrap_or_default()
        };

        logger::verbose(LogTag::Api, &format!("{} body: {}", endpoint, body));
        parse_envelope(status, &body, endpoint)
    }

    /// Token security entries for one or more addresses, keyed by address
    pub async fn token_security(
        &self,
        chain_id: &str,
        addresses: &[&str],
    ) -> Result<BTreeMap<String, TokenSecurity>, ApiError> {
        let url = self.endpoint_url("token_security", chain_id, addresses);
        let result = self
            .fetch_result::<BTreeMap<String, TokenSecurity>>(&url, "goplus.token_security")
            .await?;
        Ok(result.unwrap_or_default())
    }

    /// Rug-pull detection for a single address
    pub async fn rug_pull_security(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<Option<RugPullSecurity>, ApiError> {
        let url = self.endpoint_url("rugpull_detecting", chain_id, &[address]);
        self.fetch_result::<RugPullSecurity>(&url, "goplus.rugpull_detecting")
            .await
    }
}

/// Map an HTTP status and body onto the envelope result
///
/// 404 is `NotFound`; other non-2xx statuses and undecodable bodies are
/// `InvalidResponse`. An envelope whose code is outside `SUCCESS_CODES` is
/// `Rejected` with the API's code and message.
fn parse_envelope<T>(
    status: StatusCode,
    body: &str,
    endpoint: &str,
) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
{
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::InvalidResponse(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    let envelope: GoPlusResponse<T> = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("{} parse error: {}", endpoint, e)))?;

    if !SUCCESS_CODES.contains(&envelope.code) {
        return Err(ApiError::Rejected {
            code: envelope.code,
            message: envelope.message,
        });
    }

    Ok(envelope.result)
}

#[async_trait]
impl TokenAnalyzer for GoPlusClient {
    async fn analyze(&self, address: &str, chain_id: &str) -> Result<AnalysisResult, ApiError> {
        let token_security = self.token_security(chain_id, &[address]).await?;
        let rug_pull_security = self.rug_pull_security(chain_id, address).await?;

        Ok(AnalysisResult {
            address: address.to_string(),
            token_security,
            rug_pull_security,
        })
    }
}
