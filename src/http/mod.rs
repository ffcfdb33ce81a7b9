//! HTTP client layer — `CoinrankHttp`, one method per API endpoint.

pub mod client;

pub use client::CoinrankHttp;
