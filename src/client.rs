//! High-level client — `CoinrankClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::ConfigInfo;
use crate::domain::coin::client::Coins;
use crate::error::SdkError;
use crate::http::CoinrankHttp;

/// The primary entry point for the coin ranking SDK.
///
/// Provides nested sub-client accessors per domain: `client.coins()`.
#[derive(Clone)]
pub struct CoinrankClient {
    pub(crate) http: CoinrankHttp,
}

impl CoinrankClient {
    pub fn builder() -> CoinrankClientBuilder {
        CoinrankClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinrankClientBuilder {
    base_url: String,
    api_key: String,
}

impl Default for CoinrankClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl CoinrankClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = key.to_string();
        self
    }

    /// Seed the builder from the active environment of a config file.
    pub fn from_config(mut self, config: &ConfigInfo) -> Result<Self, SdkError> {
        let env = config.active_environment()?;
        self.base_url = env.base_api_url.clone();
        self.api_key = env.api_key.clone();
        Ok(self)
    }

    pub fn build(self) -> Result<CoinrankClient, SdkError> {
        Ok(CoinrankClient {
            http: CoinrankHttp::new(&self.base_url, &self.api_key)?,
        })
    }
}
