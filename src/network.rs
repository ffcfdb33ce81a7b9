//! Network URL constants for the Coinrank SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coinranking.com/v2";
