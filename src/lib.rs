//! # Coinrank SDK
//!
//! A Rust SDK for the Coinranking REST API: typed coin data, a paginated
//! list state machine, and persisted favorites.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, domain models, list state, favorites (no I/O beyond
//!    the pluggable favorites backend)
//! 2. **HTTP API** — `CoinrankHttp`, one method per endpoint
//! 3. **High-Level Client** — `CoinrankClient` with nested sub-clients, plus
//!    the async `CoinList` manager
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinrank_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! let client = CoinrankClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let favorites = Arc::new(FavoritesStore::in_memory());
//! let list = CoinList::new(client, favorites);
//! list.load_first_page().await;
//! for row in list.visible_rows().await {
//!     println!("{} {}", row.coin.formatted_price(), row.is_favorite);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment configuration files.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinrankClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{
        format_change, format_magnitude, format_price, group_thousands, is_positive_change,
    };
    pub use crate::shared::CoinId;

    // Domain types — coin
    pub use crate::domain::coin::state::{
        CoinListState, LoadKind, LoadPhase, LoadRequest, SortKey, LOAD_MORE_THRESHOLD, MAX_COINS,
        PAGE_SIZE,
    };
    pub use crate::domain::coin::{Coin, CoinPage, StatsResponse};

    // Domain types — favorites
    pub use crate::domain::favorites::{
        FavoritesBackend, FavoritesStore, JsonFileBackend, MemoryBackend, SubscriptionId,
        FAVORITES_KEY,
    };

    // Errors
    pub use crate::error::{ApiError, ConfigError, DecodeError, FetchError, SdkError, StoreError};

    // Configuration
    pub use crate::config::{AppEnvironment, ConfigInfo};
    pub use crate::network::DEFAULT_API_URL;

    // Client
    #[cfg(feature = "http")]
    pub use crate::client::{CoinrankClient, CoinrankClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::coin::client::Coins;
    #[cfg(feature = "http")]
    pub use crate::domain::coin::manager::{CoinList, CoinRow, LoadOutcome};
    #[cfg(feature = "http")]
    pub use crate::http::CoinrankHttp;
}
