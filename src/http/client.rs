//! Low-level HTTP client — `CoinrankHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to domain
//! types happens at the sub-client boundary. A call is a single attempt —
//! there is deliberately no retry layer here, the caller decides.

use crate::domain::coin::wire::CoinPageResponse;
use crate::error::ApiError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the coin ranking REST API.
#[derive(Clone)]
pub struct CoinrankHttp {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CoinrankHttp {
    /// Build a client for `base_url`, authenticating with `api_key`.
    ///
    /// An empty or unparsable base URL is an [`ApiError::InvalidConfiguration`],
    /// never a panic — an absent config file surfaces here as empty strings.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::InvalidConfiguration(
                "base URL is empty".to_string(),
            ));
        }
        reqwest::Url::parse(trimmed)
            .map_err(|e| ApiError::InvalidConfiguration(format!("base URL: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ApiError::InvalidConfiguration(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    // ── Coins ────────────────────────────────────────────────────────────

    /// Fetch one page of ranked coins.
    pub async fn fetch_coins(&self, offset: u32, limit: u32) -> Result<CoinPageResponse, ApiError> {
        let url = format!("{}/coins?offset={}&limit={}", self.base_url, offset, limit);
        self.get(&url).await
    }

    /// Fetch a single coin by uuid.
    pub async fn fetch_coin(&self, uuid: &str) -> Result<CoinPageResponse, ApiError> {
        let url = format!("{}/coin/{}", self.base_url, uuid);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .header("x-access-token", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "unexpected response status");
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedPayload(e.to_string()))
    }
}
