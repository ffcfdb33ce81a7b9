//! Wire types for coin responses (REST).
//!
//! Field names match the backend payload exactly; every field is optional so
//! a sparse record still decodes. Absence is preserved — it is not collapsed
//! to zero at this layer.

use serde::{Deserialize, Serialize};

/// Top-level REST envelope: `{status, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinPageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CoinPageData>,
}

/// `data` payload: aggregate stats plus the coin page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins: Option<Vec<CoinRecord>>,
}

/// Raw coin record. Numeric fields arrive as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinranking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<i64>,
    #[serde(rename = "24hVolume", skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Sparkline samples may individually be `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btc_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_volume: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
}

/// Market-wide aggregate stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_market_cap: Option<String>,
    #[serde(rename = "total24hVolume", skip_serializing_if = "Option::is_none")]
    pub total_volume_24h: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_exchanges: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_coins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_markets: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exact_backend_field_names() {
        let json = r##"{
            "status": "success",
            "data": {
                "stats": {"total": 100, "totalCoins": 38472, "total24hVolume": "99"},
                "coins": [{
                    "uuid": "Qwsogvtv82FCd",
                    "symbol": "BTC",
                    "name": "Bitcoin",
                    "color": "#f7931A",
                    "iconUrl": "https://cdn.example.com/btc.svg",
                    "marketCap": "1812735690584",
                    "price": "91579.68",
                    "listedAt": 1330214400,
                    "tier": 1,
                    "change": "-1.37",
                    "rank": 1,
                    "sparkline": ["92712.0", null, "91579.7"],
                    "lowVolume": false,
                    "coinrankingUrl": "https://coinranking.com/coin/Qwsogvtv82FCd",
                    "24hVolume": "29582134738",
                    "btcPrice": "1",
                    "contractAddresses": []
                }]
            }
        }"##;

        let resp: CoinPageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status.as_deref(), Some("success"));

        let data = resp.data.unwrap();
        assert_eq!(data.stats.unwrap().total_coins, Some(38472));

        let coins = data.coins.unwrap();
        assert_eq!(coins.len(), 1);
        let coin = &coins[0];
        assert_eq!(coin.uuid.as_deref(), Some("Qwsogvtv82FCd"));
        assert_eq!(coin.color.as_deref(), Some("#f7931A"));
        assert_eq!(coin.volume_24h.as_deref(), Some("29582134738"));
        assert_eq!(coin.low_volume, Some(false));
        assert_eq!(coin.listed_at, Some(1330214400));
        assert_eq!(
            coin.sparkline,
            Some(vec![
                Some("92712.0".to_string()),
                None,
                Some("91579.7".to_string())
            ])
        );
    }

    #[test]
    fn test_sparse_record_decodes() {
        let coin: CoinRecord = serde_json::from_str(r#"{"uuid": "x"}"#).unwrap();
        assert_eq!(coin.uuid.as_deref(), Some("x"));
        assert!(coin.price.is_none());
        assert!(coin.rank.is_none());
    }

    #[test]
    fn test_envelope_without_data() {
        let resp: CoinPageResponse = serde_json::from_str(r#"{"status": "fail"}"#).unwrap();
        assert_eq!(resp.status.as_deref(), Some("fail"));
        assert!(resp.data.is_none());
    }
}
