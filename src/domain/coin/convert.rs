//! Conversions from wire types to domain types for coins.

use super::wire::{CoinPageResponse, CoinRecord};
use super::{Coin, CoinPage};
use crate::error::{ApiError, DecodeError};
use crate::shared::CoinId;
use chrono::TimeZone;

impl TryFrom<CoinRecord> for Coin {
    type Error = DecodeError;

    fn try_from(record: CoinRecord) -> Result<Self, Self::Error> {
        let id = match record.uuid {
            Some(uuid) if !uuid.is_empty() => CoinId::from(uuid),
            _ => return Err(DecodeError::MissingId),
        };

        Ok(Self {
            id,
            name: record.name,
            symbol: record.symbol,
            price: record.price,
            change: record.change,
            market_cap: record.market_cap,
            volume_24h: record.volume_24h,
            btc_price: record.btc_price,
            rank: record.rank,
            tier: record.tier,
            color: record.color,
            icon_url: record.icon_url,
            coinranking_url: record.coinranking_url,
            sparkline: record.sparkline.unwrap_or_default(),
            low_volume: record.low_volume,
            listed_at: record
                .listed_at
                .and_then(|secs| chrono::Utc.timestamp_opt(secs, 0).single()),
            contract_addresses: record.contract_addresses.unwrap_or_default(),
        })
    }
}

impl TryFrom<CoinPageResponse> for CoinPage {
    type Error = ApiError;

    fn try_from(resp: CoinPageResponse) -> Result<Self, Self::Error> {
        match resp.status.as_deref() {
            Some("success") => {}
            other => return Err(ApiError::ErrorStatus(other.map(String::from))),
        }

        let data = resp.data;
        let (stats, records) = match data {
            Some(d) => (d.stats, d.coins.unwrap_or_default()),
            // Success with no payload is an empty page, not an error.
            None => (None, Vec::new()),
        };

        // No partial recovery: one identity-less record discards the page.
        let coins = records
            .into_iter()
            .map(Coin::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

        Ok(CoinPage { stats, coins })
    }
}
