//! Coin domain — ranked market-data records and list state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod manager;
pub mod state;
pub mod wire;

use crate::shared::fmt::{format_change, format_magnitude, format_price, is_positive_change};
use crate::shared::CoinId;
use chrono::{DateTime, Utc};

pub use state::{CoinListState, LoadKind, LoadPhase, LoadRequest, SortKey};
pub use wire::StatsResponse;

#[cfg(feature = "http")]
pub use manager::{CoinList, CoinRow};

/// A single ranked coin.
///
/// Constructed only by decoding a server response page; immutable once built
/// and replaced wholesale on re-fetch. Identity is the uuid — every other
/// field is optional, and absence is distinct from a present-but-malformed
/// value (the derived numeric views treat the latter as zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: CoinId,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// Numeric-as-string USD price.
    pub price: Option<String>,
    /// Numeric-as-string 24h percent change, already scaled (`"3.2"` = 3.2%).
    pub change: Option<String>,
    pub market_cap: Option<String>,
    pub volume_24h: Option<String>,
    pub btc_price: Option<String>,
    pub rank: Option<u32>,
    pub tier: Option<i32>,
    pub color: Option<String>,
    pub icon_url: Option<String>,
    pub coinranking_url: Option<String>,
    /// Historical price samples for charting; individual samples may be absent.
    pub sparkline: Vec<Option<String>>,
    pub low_volume: Option<bool>,
    pub listed_at: Option<DateTime<Utc>>,
    pub contract_addresses: Vec<String>,
}

impl Coin {
    /// USD price as a float; absent or unparsable → 0.0.
    pub fn price_f64(&self) -> f64 {
        parse_or_zero(self.price.as_deref())
    }

    /// 24h percent change as a float; absent or unparsable → 0.0.
    pub fn change_f64(&self) -> f64 {
        parse_or_zero(self.change.as_deref())
    }

    /// Market cap as a float; absent or unparsable → 0.0.
    pub fn market_cap_f64(&self) -> f64 {
        parse_or_zero(self.market_cap.as_deref())
    }

    /// Rank for ordering; absent → 0.
    pub fn rank_or_zero(&self) -> u32 {
        self.rank.unwrap_or(0)
    }

    pub fn is_positive_change(&self) -> bool {
        is_positive_change(self.change.as_deref().unwrap_or(""))
    }

    /// Present sparkline samples as floats, in order. Absent samples are
    /// skipped; malformed ones parse to 0.0.
    pub fn sparkline_values(&self) -> Vec<f64> {
        self.sparkline
            .iter()
            .filter_map(|s| s.as_deref())
            .map(|s| s.parse::<f64>().unwrap_or(0.0))
            .collect()
    }

    /// Display price, e.g. `$96,421.33` or `$0.000012`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price.as_deref().unwrap_or(""))
    }

    /// Display change, e.g. `+3.20%`.
    pub fn formatted_change(&self) -> String {
        format_change(self.change.as_deref().unwrap_or(""))
    }

    /// Display market cap, e.g. `$1.81B`.
    pub fn formatted_market_cap(&self) -> String {
        format_magnitude(self.market_cap_f64())
    }
}

fn parse_or_zero(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0)
}

/// One decoded page: aggregate stats plus the coins, in server order.
///
/// A success envelope with no coins array is a valid empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinPage {
    pub stats: Option<StatsResponse>,
    pub coins: Vec<Coin>,
}
