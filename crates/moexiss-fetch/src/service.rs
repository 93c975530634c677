//! Typed ISS services.

use chrono::NaiveDate;
use moexiss_book::{OrderBook, build_book};
use moexiss_table::TableRecord;
use moexiss_types::{
    AlgoMarket, BondInfo, Candle, DateRange, FortsData, FortsInfo, FutOi, Interval, IssError,
    Market, OptionData, OptionHistory, OptionInfo, OrderBookRow, Result, StockData, StockInfo,
    TradeStats,
};
use reqwest::Url;
use tracing::debug;

use crate::{
    ClientConfig, HttpTransport, IssRequest, IssResponse, Paginator, Transport, TransportError,
};

/// Selection of a history dataset: one security over a date range, or every security on
/// one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryScope {
    /// One security over a date range.
    Symbol {
        /// Security or contract code.
        symbol: String,
        /// Date bounds.
        range: DateRange,
    },
    /// All securities on one trading date.
    Date(NaiveDate),
}

impl HistoryScope {
    /// Selects one security over a date range.
    #[must_use]
    pub fn symbol(symbol: impl Into<String>, range: DateRange) -> Self {
        Self::Symbol {
            symbol: symbol.into(),
            range,
        }
    }

    /// Selects all securities on a date.
    #[must_use]
    pub const fn date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// Returns the security code, if one is selected.
    #[must_use]
    pub fn symbol_name(&self) -> Option<&str> {
        match self {
            Self::Symbol { symbol, .. } => Some(symbol),
            Self::Date(_) => None,
        }
    }

    fn apply_dates(&self, request: IssRequest) -> IssRequest {
        match self {
            Self::Symbol { range, .. } => request.range(*range),
            Self::Date(date) => request.date(*date),
        }
    }
}

/// Client for the ISS services.
///
/// Paginated services return a [`Paginator`], which the caller drains with
/// [`fetch_all`](Paginator::fetch_all) or consumes page by page.
#[derive(Debug, Clone)]
pub struct IssClient<T = HttpTransport> {
    transport: T,
    base: Url,
}

impl IssClient<HttpTransport> {
    /// Creates an anonymous client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, TransportError> {
        let base = config.base()?;
        Ok(Self {
            transport: HttpTransport::new(config)?,
            base,
        })
    }

    /// Creates a client and opens a passport session if credentials are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or authentication fails.
    pub async fn connect(config: ClientConfig) -> std::result::Result<Self, TransportError> {
        let base = config.base()?;
        Ok(Self {
            transport: HttpTransport::connect(config).await?,
            base,
        })
    }
}

impl<T: Transport> IssClient<T> {
    /// Creates a client over any transport. `base` must end with `/`.
    #[must_use]
    pub const fn with_transport(transport: T, base: Url) -> Self {
        Self { transport, base }
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the API root.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Starts a pagination session reading `block` from the responses to `request`.
    pub fn paginate<R: TableRecord>(
        &self,
        request: IssRequest,
        block: &str,
    ) -> Paginator<'_, T, R> {
        Paginator::new(&self.transport, self.base.clone(), request, block)
    }

    /// Fetches a single page and decodes `block`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the block does not decode into `R`.
    pub async fn fetch_one<R: TableRecord>(
        &self,
        request: &IssRequest,
        block: &str,
    ) -> Result<Vec<R>> {
        let url = request.url(&self.base).map_err(IssError::transport)?;
        debug!(%url, block, "fetching");
        let body = self
            .transport
            .get(&url, request.requires_auth())
            .await
            .map_err(IssError::transport)?;
        IssResponse::from_slice(&body)?.records(block)
    }

    /// Candles of a security.
    pub fn candles(
        &self,
        market: Market,
        symbol: &str,
        interval: Interval,
        range: DateRange,
    ) -> Paginator<'_, T, Candle> {
        let request = IssRequest::candles()
            .segment(market)
            .symbol(symbol)
            .interval(interval)
            .range(range)
            .metadata(false);
        self.paginate(request, "candles")
    }

    /// AlgoPack trade statistics. `latest` keeps only the last record of each series.
    pub fn trade_stats(
        &self,
        market: AlgoMarket,
        scope: &HistoryScope,
        latest: bool,
    ) -> Paginator<'_, T, TradeStats> {
        let request = IssRequest::algopack(market, "tradestats")
            .target(scope.symbol_name().unwrap_or_default())
            .latest(latest)
            .metadata(false);
        self.paginate(scope.apply_dates(request), "data")
    }

    /// Daily option results.
    pub fn option_history(&self, scope: &HistoryScope) -> Paginator<'_, T, OptionHistory> {
        let request = IssRequest::new()
            .history()
            .engine("futures")
            .market("options")
            .with_securities(true)
            .symbol(scope.symbol_name().unwrap_or_default())
            .metadata(false);
        self.paginate(scope.apply_dates(request), "history")
    }

    /// Futures open interest by client group.
    pub fn fut_oi(&self, scope: &HistoryScope, latest: bool) -> Paginator<'_, T, FutOi> {
        let request = IssRequest::analytics("futoi")
            .with_securities(true)
            .symbol(scope.symbol_name().unwrap_or_default())
            .latest(latest)
            .metadata(false);
        self.paginate(scope.apply_dates(request), "futoi")
    }

    /// Static descriptions of shares. No symbols selects the whole board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn stock_info<S: AsRef<str> + Sync>(&self, symbols: &[S]) -> Result<Vec<StockInfo>> {
        self.securities_block(IssRequest::stock(), symbols, "securities")
            .await
    }

    /// Current market data of shares.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn stock_data<S: AsRef<str> + Sync>(&self, symbols: &[S]) -> Result<Vec<StockData>> {
        self.securities_block(IssRequest::stock(), symbols, "marketdata")
            .await
    }

    /// Static descriptions of futures contracts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn forts_info<S: AsRef<str> + Sync>(&self, symbols: &[S]) -> Result<Vec<FortsInfo>> {
        self.securities_block(IssRequest::forts(), symbols, "securities")
            .await
    }

    /// Current market data of futures contracts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn forts_data<S: AsRef<str> + Sync>(&self, symbols: &[S]) -> Result<Vec<FortsData>> {
        self.securities_block(IssRequest::forts(), symbols, "marketdata")
            .await
    }

    /// Static descriptions of option series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn options_info<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
    ) -> Result<Vec<OptionInfo>> {
        self.securities_block(IssRequest::options(), symbols, "securities")
            .await
    }

    /// Current market data of options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn options_data<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
    ) -> Result<Vec<OptionData>> {
        self.securities_block(IssRequest::options(), symbols, "marketdata")
            .await
    }

    /// Static descriptions of the bonds on `board`, e.g. `TQOB`. An empty board lists
    /// every board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn bonds_info(&self, board: &str) -> Result<Vec<BondInfo>> {
        self.securities_block::<_, &str>(IssRequest::bonds().board(board), &[], "securities")
            .await
    }

    /// Order book snapshot of a security. Requires a passport session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, access is not granted or the rows do not
    /// decode.
    pub async fn order_book(&self, market: Market, symbol: &str) -> Result<OrderBook> {
        let request = IssRequest::new()
            .segment(market)
            .with_securities(true)
            .symbol(symbol)
            .target("orderbook")
            .only("orderbook")
            .metadata(false)
            .authorized();
        let rows: Vec<OrderBookRow> = self.fetch_one(&request, "orderbook").await?;
        Ok(build_book(&rows))
    }

    async fn securities_block<R: TableRecord, S: AsRef<str> + Sync>(
        &self,
        request: IssRequest,
        symbols: &[S],
        block: &str,
    ) -> Result<Vec<R>> {
        let request = request.only(block).symbols(symbols).metadata(false);
        self.fetch_one(&request, block).await
    }
}
