//! Coins sub-client — typed page and detail fetches.

use super::{Coin, CoinPage};
use crate::client::CoinrankClient;
use crate::error::ApiError;
use crate::shared::CoinId;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinrankClient,
}

impl<'a> Coins<'a> {
    /// Fetch one page of ranked coins as domain records.
    pub async fn page(&self, offset: u32, limit: u32) -> Result<CoinPage, ApiError> {
        let resp = self.client.http.fetch_coins(offset, limit).await?;
        CoinPage::try_from(resp)
    }

    /// Fetch a single coin by uuid.
    pub async fn detail(&self, uuid: &CoinId) -> Result<Coin, ApiError> {
        let resp = self.client.http.fetch_coin(uuid.as_str()).await?;
        let page = CoinPage::try_from(resp)?;
        page.coins.into_iter().next().ok_or_else(|| {
            ApiError::MalformedPayload(format!("detail response for {uuid} contained no coin"))
        })
    }
}
