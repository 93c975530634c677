//! ISS URL construction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use moexiss_types::{AlgoMarket, DateRange, Interval, Market, format_date};
use reqwest::Url;

use crate::TransportError;

/// Response format suffix of every ISS resource.
const FORMAT_SUFFIX: &str = ".json";

/// Builder for an ISS request.
///
/// Path segments are emitted in a fixed order:
///
/// ```text
/// [datashop/algopack/<market>/<dataset>] [analyticalproducts/<product>] [history]
/// [engines/<engine>] [markets/<market>] [boards/<board>] [securities] [<symbol>] [<target>].json
/// ```
///
/// Query parameters are emitted sorted by name. The pagination offset `start` is only
/// emitted when it is greater than zero.
///
/// ```
/// use moexiss_fetch::IssRequest;
/// use reqwest::Url;
///
/// let base = Url::parse("https://iss.moex.com/iss/").unwrap();
/// let url = IssRequest::stock().only("securities").metadata(false).url(&base).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://iss.moex.com/iss/engines/stock/markets/shares/boards/TQBR/securities.json?iss.meta=off&iss.only=securities"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssRequest {
    algopack: Option<(AlgoMarket, String)>,
    analytics: Option<String>,
    history: bool,
    engine: Option<String>,
    market: Option<String>,
    board: Option<String>,
    securities: bool,
    symbol: Option<String>,
    target: Option<String>,
    params: BTreeMap<&'static str, String>,
    start: usize,
    authorized: bool,
}

impl Default for IssRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl IssRequest {
    /// Creates an empty request with metadata enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            algopack: None,
            analytics: None,
            history: false,
            engine: None,
            market: None,
            board: None,
            securities: false,
            symbol: None,
            target: None,
            params: BTreeMap::new(),
            start: 0,
            authorized: false,
        }
    }

    /// Securities of the main shares board.
    #[must_use]
    pub fn stock() -> Self {
        Self::new().segment(Market::STOCK_SHARES).target("securities")
    }

    /// Securities of the futures market, all boards.
    #[must_use]
    pub fn forts() -> Self {
        Self::new().engine("futures").market("forts").target("securities")
    }

    /// Securities of the options market, all boards.
    #[must_use]
    pub fn options() -> Self {
        Self::new().engine("futures").market("options").target("securities")
    }

    /// Securities of the bond market, all boards.
    #[must_use]
    pub fn bonds() -> Self {
        Self::new().engine("stock").market("bonds").target("securities")
    }

    /// Candles of a security; combine with [`segment`](Self::segment) and
    /// [`symbol`](Self::symbol).
    #[must_use]
    pub fn candles() -> Self {
        Self::new().with_securities(true).target("candles")
    }

    /// An AlgoPack dataset, e.g. `tradestats`.
    #[must_use]
    pub fn algopack(market: AlgoMarket, dataset: impl Into<String>) -> Self {
        Self {
            algopack: Some((market, dataset.into())),
            ..Self::new()
        }
    }

    /// An analytical product, e.g. `futoi`.
    #[must_use]
    pub fn analytics(product: impl Into<String>) -> Self {
        Self {
            analytics: Some(product.into()),
            ..Self::new()
        }
    }

    /// Requests daily results instead of current data.
    #[must_use]
    pub fn history(mut self) -> Self {
        self.history = true;
        self
    }

    /// Sets the trading engine.
    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Sets the market.
    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    /// Sets the board. An empty board clears it.
    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into()).filter(|s| !s.is_empty());
        self
    }

    /// Sets engine, market and board from a market preset.
    #[must_use]
    pub fn segment(mut self, market: Market) -> Self {
        self.engine = Some(market.engine.to_string());
        self.market = Some(market.market.to_string());
        self.board = market.board.map(str::to_string);
        self
    }

    /// Adds or removes the `securities` path segment.
    #[must_use]
    pub fn with_securities(mut self, securities: bool) -> Self {
        self.securities = securities;
        self
    }

    /// Sets a single security path segment. An empty symbol clears it.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into()).filter(|s| !s.is_empty());
        self
    }

    /// Sets the final path segment. An empty target clears it.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into()).filter(|s| !s.is_empty());
        self
    }

    /// Restricts the response to the named blocks (`iss.only`).
    #[must_use]
    pub fn only(self, blocks: impl Into<String>) -> Self {
        self.param("iss.only", blocks.into())
    }

    /// Enables or disables block metadata (`iss.meta`).
    #[must_use]
    pub fn metadata(mut self, enabled: bool) -> Self {
        if enabled {
            self.params.remove("iss.meta");
            self
        } else {
            self.param("iss.meta", "off")
        }
    }

    /// Requests the extended JSON layout (`iss.json=extended`).
    #[must_use]
    pub fn extended_json(self) -> Self {
        self.param("iss.json", "extended")
    }

    /// Sets the `date` parameter.
    #[must_use]
    pub fn date(self, date: NaiveDate) -> Self {
        self.param("date", format_date(date))
    }

    /// Sets the `from` parameter.
    #[must_use]
    pub fn from_date(self, date: NaiveDate) -> Self {
        self.param("from", format_date(date))
    }

    /// Sets the `till` parameter.
    #[must_use]
    pub fn till_date(self, date: NaiveDate) -> Self {
        self.param("till", format_date(date))
    }

    /// Sets both `from` and `till`.
    #[must_use]
    pub fn range(self, range: DateRange) -> Self {
        self.from_date(range.start).till_date(range.end)
    }

    /// Sets the candle `interval`.
    #[must_use]
    pub fn interval(self, interval: Interval) -> Self {
        self.param("interval", interval.code().to_string())
    }

    /// Sets the `securities` filter to a comma-separated list.
    #[must_use]
    pub fn symbols<S: AsRef<str>>(self, symbols: &[S]) -> Self {
        let list = symbols
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        if list.is_empty() {
            self
        } else {
            self.param("securities", list)
        }
    }

    /// Requests only the latest record of each series (`latest=1`).
    #[must_use]
    pub fn latest(mut self, latest: bool) -> Self {
        if latest {
            self.param("latest", "1")
        } else {
            self.params.remove("latest");
            self
        }
    }

    /// Sets the row offset of the first page.
    #[must_use]
    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Marks the request as requiring a passport session.
    #[must_use]
    pub fn authorized(mut self) -> Self {
        self.authorized = true;
        self
    }

    /// Returns the row offset.
    #[must_use]
    pub const fn start_offset(&self) -> usize {
        self.start
    }

    /// Returns true if the request requires a passport session.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.authorized
    }

    /// Returns the path relative to the API root, unescaped.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Returns the query parameters, sorted by name.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = self.params.clone();
        if self.start > 0 {
            params.insert("start", self.start.to_string());
        }
        params.into_iter().collect()
    }

    /// Builds the full URL against an API root ending with `/`.
    ///
    /// Every path segment is percent-encoded, so a symbol can never add segments, a query or
    /// a fragment.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if `base` cannot carry a path or a segment is
    /// `.` or `..`.
    pub fn url(&self, base: &Url) -> Result<Url, TransportError> {
        let segments = self.segments();
        if let Some(bad) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(TransportError::InvalidUrl(format!(
                "{}: dot segment '{bad}'",
                self.path()
            )));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(format!("{base}: cannot be a base")))?
            .pop_if_empty()
            .extend(&segments);

        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Path segments with the format suffix on the last one.
    fn segments(&self) -> Vec<String> {
        let mut segments: Vec<&str> = Vec::new();
        if let Some((market, dataset)) = &self.algopack {
            segments.extend(["datashop", "algopack", market.as_str(), dataset.as_str()]);
        }
        if let Some(product) = &self.analytics {
            segments.extend(["analyticalproducts", product.as_str()]);
        }
        if self.history {
            segments.push("history");
        }
        if let Some(engine) = &self.engine {
            segments.extend(["engines", engine.as_str()]);
        }
        if let Some(market) = &self.market {
            segments.extend(["markets", market.as_str()]);
        }
        if let Some(board) = &self.board {
            segments.extend(["boards", board.as_str()]);
        }
        if self.securities {
            segments.push("securities");
        }
        if let Some(symbol) = &self.symbol {
            segments.push(symbol);
        }
        if let Some(target) = &self.target {
            segments.push(target);
        }

        let last = segments.pop().unwrap_or("index");
        let mut segments: Vec<String> = segments.into_iter().map(str::to_string).collect();
        segments.push(format!("{last}{FORMAT_SUFFIX}"));
        segments
    }

    fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(name, value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://iss.moex.com/iss/").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_candles_url() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let url = IssRequest::candles()
            .segment(Market::STOCK_SHARES)
            .symbol("SBER")
            .interval(Interval::Day1)
            .range(range)
            .metadata(false)
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER/candles.json?from=2024-01-01&interval=24&iss.meta=off&till=2024-01-31"
        );
    }

    #[test]
    fn test_algopack_url() {
        let url = IssRequest::algopack(AlgoMarket::Eq, "tradestats")
            .target("SBER")
            .from_date(date(2024, 8, 30))
            .till_date(date(2024, 9, 3))
            .latest(true)
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/datashop/algopack/eq/tradestats/SBER.json?from=2024-08-30&latest=1&till=2024-09-03"
        );
    }

    #[test]
    fn test_algopack_all_securities_url() {
        let url = IssRequest::algopack(AlgoMarket::Fo, "tradestats")
            .date(date(2024, 4, 17))
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/datashop/algopack/fo/tradestats.json?date=2024-04-17"
        );
    }

    #[test]
    fn test_option_history_url() {
        let url = IssRequest::options()
            .history()
            .with_securities(true)
            .target("")
            .date(date(2024, 7, 1))
            .metadata(false)
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/history/engines/futures/markets/options/securities.json?date=2024-07-01&iss.meta=off"
        );
    }

    #[test]
    fn test_futoi_url() {
        let url = IssRequest::analytics("futoi")
            .with_securities(true)
            .symbol("si")
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/analyticalproducts/futoi/securities/si.json"
        );
    }

    #[test]
    fn test_symbols_list_is_encoded() {
        let url = IssRequest::forts()
            .only("marketdata")
            .symbols(&["SiU4", "RIU4"])
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/engines/futures/markets/forts/securities.json?iss.only=marketdata&securities=SiU4%2CRIU4"
        );
    }

    #[test]
    fn test_start_only_when_positive() {
        let request = IssRequest::bonds();
        assert!(request.query().is_empty());
        let request = request.start(100);
        assert_eq!(request.query(), vec![("start", "100".to_string())]);
        assert_eq!(request.start_offset(), 100);
    }

    #[test]
    fn test_query_sorted_by_name() {
        let request = IssRequest::candles()
            .till_date(date(2024, 2, 1))
            .start(5)
            .interval(Interval::Hour1)
            .latest(true)
            .extended_json()
            .date(date(2024, 1, 1))
            .from_date(date(2024, 1, 1))
            .only("candles")
            .metadata(false)
            .symbols(&["SBER"]);
        let names: Vec<_> = request.query().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "date",
                "from",
                "interval",
                "iss.json",
                "iss.meta",
                "iss.only",
                "latest",
                "securities",
                "start",
                "till"
            ]
        );
    }

    #[test]
    fn test_toggles_remove_params() {
        let request = IssRequest::stock()
            .metadata(false)
            .latest(true)
            .metadata(true)
            .latest(false);
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_empty_request_is_index() {
        assert_eq!(IssRequest::new().path(), "index.json");
    }

    #[test]
    fn test_symbol_is_escaped_in_path() {
        let url = IssRequest::candles()
            .segment(Market::STOCK_SHARES)
            .symbol("SBER?start=999#")
            .start(5)
            .url(&base())
            .unwrap();
        assert_eq!(
            url.path(),
            "/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER%3Fstart=999%23/candles.json"
        );
        assert_eq!(url.query(), Some("start=5"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_symbol_cannot_climb_out_of_path() {
        let url = IssRequest::candles()
            .segment(Market::STOCK_SHARES)
            .symbol("../../../../index")
            .url(&base())
            .unwrap();
        assert_eq!(
            url.path(),
            "/iss/engines/stock/markets/shares/boards/TQBR/securities/..%2F..%2F..%2F..%2Findex/candles.json"
        );
    }

    #[test]
    fn test_dot_segment_rejected() {
        let result = IssRequest::candles()
            .segment(Market::STOCK_SHARES)
            .symbol("..")
            .url(&base());
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let base = Url::parse("https://iss.moex.com/iss").unwrap();
        let url = IssRequest::bonds().url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "https://iss.moex.com/iss/engines/stock/markets/bonds/securities.json"
        );
    }

    #[test]
    fn test_authorized_flag() {
        assert!(!IssRequest::stock().requires_auth());
        assert!(IssRequest::stock().authorized().requires_auth());
    }
}
