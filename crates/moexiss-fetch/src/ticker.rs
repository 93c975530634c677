//! Ticker resolution across the shares and futures markets.

use moexiss_book::OrderBook;
use moexiss_table::TableRecord;
use moexiss_types::{
    Candle, DateRange, FortsInfo, Interval, IssError, Market, Result, StockInfo, TickerData,
    TickerInfo,
};
use tracing::debug;

use crate::{IssClient, IssRequest, Paginator, Transport};

/// Codes shorter than this never match a share or a contract.
const MIN_CODE_LEN: usize = 3;

/// A security code resolved to its market.
///
/// Created by [`IssClient::ticker`]. Shares are looked up first, then futures by contract
/// code, then futures by series name (e.g. `RTS-9.24`).
#[derive(Debug, Clone)]
pub struct Ticker<'a, T> {
    client: &'a IssClient<T>,
    market: Market,
    sec_id: String,
    short_name: String,
    sec_name: String,
    decimals: i64,
    min_step: f64,
    sec_type: String,
    asset_code: String,
    last_del_date: String,
}

impl<'a, T: Transport> Ticker<'a, T> {
    fn share(client: &'a IssClient<T>, info: &StockInfo) -> Self {
        Self {
            client,
            market: Market::STOCK_SHARES,
            sec_id: info.sec_id.clone(),
            short_name: info.short_name.clone(),
            sec_name: info.sec_name.clone(),
            decimals: info.decimals,
            min_step: info.min_step,
            sec_type: info.sec_type.clone(),
            asset_code: String::new(),
            last_del_date: String::new(),
        }
    }

    fn contract(client: &'a IssClient<T>, info: &FortsInfo) -> Self {
        Self {
            client,
            market: Market::FORTS,
            sec_id: info.sec_id.clone(),
            short_name: info.short_name.clone(),
            sec_name: info.sec_name.clone(),
            decimals: info.decimals,
            min_step: info.min_step,
            sec_type: info.sec_type.clone(),
            asset_code: info.asset_code.clone(),
            last_del_date: info.last_del_date.clone(),
        }
    }

    /// Market the ticker trades on.
    #[must_use]
    pub const fn market(&self) -> Market {
        self.market
    }

    /// Security or contract code.
    #[must_use]
    pub fn sec_id(&self) -> &str {
        &self.sec_id
    }

    /// Short name, the series for futures.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Full name.
    #[must_use]
    pub fn sec_name(&self) -> &str {
        &self.sec_name
    }

    /// Price precision.
    #[must_use]
    pub const fn decimals(&self) -> i64 {
        self.decimals
    }

    /// Minimum price step.
    #[must_use]
    pub const fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Security type.
    #[must_use]
    pub fn sec_type(&self) -> &str {
        &self.sec_type
    }

    /// Underlying asset code; empty for shares.
    #[must_use]
    pub fn asset_code(&self) -> &str {
        &self.asset_code
    }

    /// Delivery day; empty for shares.
    #[must_use]
    pub fn last_del_date(&self) -> &str {
        &self.last_del_date
    }

    /// Current description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the ticker is no longer listed.
    pub async fn info(&self) -> Result<TickerInfo> {
        self.first_row("securities").await
    }

    /// Current market data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the ticker is no longer listed.
    pub async fn data(&self) -> Result<TickerData> {
        self.first_row("marketdata").await
    }

    /// Candles of the ticker.
    pub fn candles(&self, interval: Interval, range: DateRange) -> Paginator<'a, T, Candle> {
        self.client.candles(self.market, &self.sec_id, interval, range)
    }

    /// Order book snapshot. Requires a passport session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or access is not granted.
    pub async fn order_book(&self) -> Result<OrderBook> {
        self.client.order_book(self.market, &self.sec_id).await
    }

    async fn first_row<R: TableRecord>(&self, block: &str) -> Result<R> {
        let request = IssRequest::new()
            .segment(self.market)
            .with_securities(true)
            .symbol(self.sec_id.as_str())
            .only(block)
            .metadata(false);
        self.client
            .fetch_one(&request, block)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| IssError::TickerNotFound(self.sec_id.clone()))
    }
}

impl<T: Transport> IssClient<T> {
    /// Resolves a share code, futures contract code or futures series name.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::TickerNotFound`] if no market lists the code, or the error of a
    /// failed lookup.
    pub async fn ticker(&self, code: &str) -> Result<Ticker<'_, T>> {
        if code.chars().count() < MIN_CODE_LEN {
            return Err(IssError::TickerNotFound(code.to_string()));
        }

        if let [info] = self.stock_info(&[code]).await?.as_slice() {
            debug!(code, "resolved as share");
            return Ok(Ticker::share(self, info));
        }
        if let [info] = self.forts_info(&[code]).await?.as_slice() {
            debug!(code, "resolved as futures contract");
            return Ok(Ticker::contract(self, info));
        }

        let contracts = self.forts_info::<&str>(&[]).await?;
        match contracts.iter().find(|info| info.short_name == code) {
            Some(info) => {
                debug!(code, sec_id = %info.sec_id, "resolved as futures series");
                Ok(Ticker::contract(self, info))
            }
            None => Err(IssError::TickerNotFound(code.to_string())),
        }
    }
}
