//! Record schemas for ISS tables.
//!
//! Each record is declared once with [`table_record!`](moexiss_table::table_record), which
//! generates both the struct and its column mapping. Column names are the service's own and
//! are case-sensitive: AlgoPack datasets use lowercase names, the classic ISS engines use
//! uppercase ones.

use moexiss_table::table_record;
use serde::{Deserialize, Serialize};

table_record! {
    /// OHLCV candle from the `candles` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Candle {
        /// Opening price.
        pub open: f64,
        /// Closing price.
        pub close: f64,
        /// Highest price.
        pub high: f64,
        /// Lowest price.
        pub low: f64,
        /// Traded value in currency.
        pub value: f64,
        /// Traded volume in securities.
        pub volume: f64,
        /// Period start, `YYYY-MM-DD HH:MM:SS`.
        pub begin: String,
        /// Period end, `YYYY-MM-DD HH:MM:SS`.
        pub end: String,
    }
}

table_record! {
    /// Five-minute trade statistics from the AlgoPack `tradestats` dataset.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct TradeStats {
        /// Trade date.
        pub trade_date: String => "tradedate",
        /// End of the five-minute period.
        pub trade_time: String => "tradetime",
        /// Security code.
        pub sec_id: String => "secid",
        /// Underlying asset code (futures only).
        pub asset_code: String => "asset_code",
        /// Opening price.
        pub open: f64 => "pr_open",
        /// Highest price.
        pub high: f64 => "pr_high",
        /// Lowest price.
        pub low: f64 => "pr_low",
        /// Closing price.
        pub close: f64 => "pr_close",
        /// Price standard deviation.
        pub std: f64 => "pr_std",
        /// Volume in lots.
        pub volume: i64 => "vol",
        /// Value in rubles.
        pub value: f64 => "val",
        /// Number of trades.
        pub trades: i64 => "trades",
        /// Volume-weighted average price.
        pub vwap: f64 => "pr_vwap",
        /// Price change over the period, percent.
        pub change: f64 => "pr_change",
        /// Number of buy trades.
        pub trades_buy: i64 => "trades_b",
        /// Number of sell trades.
        pub trades_sell: i64 => "trades_s",
        /// Buy value in rubles.
        pub value_buy: f64 => "val_b",
        /// Sell value in rubles.
        pub value_sell: f64 => "val_s",
        /// Buy volume in lots.
        pub volume_buy: i64 => "vol_b",
        /// Sell volume in lots.
        pub volume_sell: i64 => "vol_s",
        /// Buy to sell volume imbalance.
        pub disb: f64 => "disb",
        /// Buy VWAP.
        pub vwap_buy: f64 => "pr_vwap_b",
        /// Sell VWAP.
        pub vwap_sell: f64 => "pr_vwap_s",
        /// Open interest at open (futures only).
        pub oi_open: i64 => "oi_open",
        /// Highest open interest (futures only).
        pub oi_high: i64 => "oi_high",
        /// Lowest open interest (futures only).
        pub oi_low: i64 => "oi_low",
        /// Open interest at close (futures only).
        pub oi_close: i64 => "oi_close",
        /// Publication time.
        pub sys_time: String => "SYSTIME",
    }
}

table_record! {
    /// One level of the `orderbook` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct OrderBookRow {
        /// Security code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Side tag, `B` for buy and `S` for sell.
        pub buy_sell: String => "BUYSELL",
        /// Level price.
        pub price: f64 => "PRICE",
        /// Level quantity in lots.
        pub quantity: i64 => "QUANTITY",
        /// Update sequence number; its leading digits encode the date.
        pub seq_num: i64 => "SEQNUM",
        /// Update time of day, `HH:MM:SS`.
        pub update_time: String => "UPDATETIME",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
    }
}

table_record! {
    /// Static description of a share from the `securities` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct StockInfo {
        /// Security code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Short name.
        pub short_name: String => "SHORTNAME",
        /// Last price of the previous day.
        pub prev_price: f64 => "PREVPRICE",
        /// Lot size.
        pub lot_size: i64 => "LOTSIZE",
        /// Face value.
        pub face_value: f64 => "FACEVALUE",
        /// Trading status.
        pub status: String => "STATUS",
        /// Board name.
        pub board_name: String => "BOARDNAME",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
        /// Full name.
        pub sec_name: String => "SECNAME",
        /// Remarks.
        pub remarks: String => "REMARKS",
        /// Market code.
        pub market_code: String => "MARKETCODE",
        /// Instrument group.
        pub instr_id: String => "INSTRID",
        /// Sector (deprecated by the service).
        pub sector_id: String => "SECTORID",
        /// Minimum price step.
        pub min_step: f64 => "MINSTEP",
        /// Previous day's weighted average price.
        pub prev_wa_price: f64 => "PREVWAPRICE",
        /// Face value currency.
        pub face_unit: String => "FACEUNIT",
        /// Previous trading date.
        pub prev_date: String => "PREVDATE",
        /// Issue size.
        pub issue_size: i64 => "ISSUESIZE",
        /// ISIN code.
        pub isin: String => "ISIN",
        /// Latin name.
        pub lat_name: String => "LATNAME",
        /// Registration number.
        pub reg_number: String => "REGNUMBER",
        /// Previous day's official close.
        pub prev_legal_close_price: f64 => "PREVLEGALCLOSEPRICE",
        /// Settlement currency.
        pub currency_id: String => "CURRENCYID",
        /// Security type.
        pub sec_type: String => "SECTYPE",
        /// Listing level.
        pub list_level: i64 => "LISTLEVEL",
        /// Settlement date.
        pub settle_date: String => "SETTLEDATE",
    }
}

table_record! {
    /// Current market data of a share from the `marketdata` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct StockData {
        /// Security code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Best bid.
        pub bid: f64 => "BID",
        /// Best offer.
        pub offer: f64 => "OFFER",
        /// Bid/offer spread.
        pub spread: f64 => "SPREAD",
        /// Total bid volume in lots.
        pub bid_depth_total: i64 => "BIDDEPTHT",
        /// Total offer volume in lots.
        pub offer_depth_total: i64 => "OFFERDEPTHT",
        /// First trade price.
        pub open: f64 => "OPEN",
        /// Lowest trade price.
        pub low: f64 => "LOW",
        /// Highest trade price.
        pub high: f64 => "HIGH",
        /// Last trade price.
        pub last: f64 => "LAST",
        /// Change of the last price to the previous trade.
        pub last_change: f64 => "LASTCHANGE",
        /// Change of the last price to the previous trade, percent.
        pub last_change_prcnt: f64 => "LASTCHANGEPRCNT",
        /// Last trade size in lots.
        pub qty: i64 => "QTY",
        /// Last trade value.
        pub value: f64 => "VALUE",
        /// Weighted average price.
        pub wa_price: f64 => "WAPRICE",
        /// Post-trading period price.
        pub close_price: f64 => "CLOSEPRICE",
        /// Number of trades today.
        pub num_trades: i64 => "NUMTRADES",
        /// Volume today in securities.
        pub vol_today: i64 => "VOLTODAY",
        /// Value today in settlement currency.
        pub val_today: i64 => "VALTODAY",
        /// Trading status indicator.
        pub trading_status: String => "TRADINGSTATUS",
        /// Last update time.
        pub update_time: String => "UPDATETIME",
        /// Last trade time.
        pub time: String => "TIME",
        /// Update sequence number.
        pub seq_num: i64 => "SEQNUM",
        /// Load time.
        pub sys_time: String => "SYSTIME",
        /// Current capitalisation.
        pub issue_capitalization: f64 => "ISSUECAPITALIZATION",
        /// Trading session.
        pub trading_session: String => "TRADINGSESSION",
    }
}

table_record! {
    /// Static description of a futures contract from the `securities` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct FortsInfo {
        /// Contract code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Short name.
        pub short_name: String => "SHORTNAME",
        /// Full name.
        pub sec_name: String => "SECNAME",
        /// Previous day's settlement price.
        pub prev_settle_price: f64 => "PREVSETTLEPRICE",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
        /// Minimum price step.
        pub min_step: f64 => "MINSTEP",
        /// Last trading day.
        pub last_trade_date: String => "LASTTRADEDATE",
        /// Delivery day.
        pub last_del_date: String => "LASTDELDATE",
        /// Contract type.
        pub sec_type: String => "SECTYPE",
        /// Latin name.
        pub lat_name: String => "LATNAME",
        /// Underlying asset code.
        pub asset_code: String => "ASSETCODE",
        /// Previous day's open interest.
        pub prev_open_position: i64 => "PREVOPENPOSITION",
        /// Underlying units per contract.
        pub lot_volume: i64 => "LOTVOLUME",
        /// Initial margin.
        pub initial_margin: f64 => "INITIALMARGIN",
        /// Upper price limit.
        pub high_limit: f64 => "HIGHLIMIT",
        /// Lower price limit.
        pub low_limit: f64 => "LOWLIMIT",
        /// Price step value.
        pub step_price: f64 => "STEPPRICE",
        /// Last clearing settlement price.
        pub last_settle_price: f64 => "LASTSETTLEPRICE",
        /// Last price of the previous day.
        pub prev_price: f64 => "PREVPRICE",
        /// Margin data timestamp.
        pub im_time: String => "IMTIME",
        /// Trade registration fee.
        pub buy_sell_fee: f64 => "BUYSELLFEE",
        /// Scalper trade fee.
        pub scalper_fee: f64 => "SCALPERFEE",
        /// Negotiated trade fee.
        pub negotiated_fee: f64 => "NEGOTIATEDFEE",
        /// Exercise fee.
        pub exercise_fee: f64 => "EXERCISEFEE",
    }
}

table_record! {
    /// Current market data of a futures contract from the `marketdata` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct FortsData {
        /// Contract code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Best bid.
        pub bid: f64 => "BID",
        /// Best offer.
        pub offer: f64 => "OFFER",
        /// Bid/offer spread.
        pub spread: f64 => "SPREAD",
        /// First trade price.
        pub open: f64 => "OPEN",
        /// Lowest trade price.
        pub low: f64 => "LOW",
        /// Highest trade price.
        pub high: f64 => "HIGH",
        /// Last trade price.
        pub last: f64 => "LAST",
        /// Last trade size in contracts.
        pub quantity: i64 => "QUANTITY",
        /// Change of the last price to the previous trade.
        pub last_change: f64 => "LASTCHANGE",
        /// Current settlement price.
        pub settle_price: f64 => "SETTLEPRICE",
        /// Change of the settlement price.
        pub settle_to_prev_settle: f64 => "SETTLETOPREVSETTLE",
        /// Number of trades today.
        pub num_trades: i64 => "NUMTRADES",
        /// Volume today in contracts.
        pub vol_today: i64 => "VOLTODAY",
        /// Value today in rubles.
        pub val_today: i64 => "VALTODAY",
        /// Last update time.
        pub update_time: String => "UPDATETIME",
        /// Change of the last price to the previous trade, percent.
        pub last_change_prcnt: f64 => "LASTCHANGEPRCNT",
        /// Last trade time.
        pub time: String => "TIME",
        /// Update sequence number.
        pub seq_num: i64 => "SEQNUM",
        /// Load time.
        pub sys_time: String => "SYSTIME",
        /// Date of the last trade.
        pub trade_date: String => "TRADEDATE",
        /// Open interest in contracts.
        pub open_position: f64 => "OPENPOSITION",
        /// Change of open interest since the previous close.
        pub oi_change: i64 => "OICHANGE",
        /// Opening auction price.
        pub open_period_price: f64 => "OPENPERIODPRICE",
        /// Funding in rubles.
        pub swap_rate: f64 => "SWAPRATE",
    }
}

table_record! {
    /// Static description of a bond from the `securities` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct BondInfo {
        /// Security code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Short name.
        pub short_name: String => "SHORTNAME",
        /// Full name.
        pub sec_name: String => "SECNAME",
        /// Previous day's weighted average price, percent of face value.
        pub prev_wa_price: f64 => "PREVWAPRICE",
        /// Yield at the previous day's weighted average price.
        pub yield_at_prev_wa_price: f64 => "YIELDATPREVWAPRICE",
        /// Coupon amount in face value currency.
        pub coupon_value: f64 => "COUPONVALUE",
        /// Next coupon date.
        pub next_coupon: String => "NEXTCOUPON",
        /// Maturity date.
        pub mat_date: String => "MATDATE",
        /// Accrued interest.
        pub accrued_int: f64 => "ACCRUEDINT",
        /// Last price of the previous day, percent of face value.
        pub prev_price: f64 => "PREVPRICE",
        /// Lot size.
        pub lot_size: i64 => "LOTSIZE",
        /// Outstanding face value.
        pub face_value: f64 => "FACEVALUE",
        /// Trading status.
        pub status: String => "STATUS",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
        /// Coupon period in days.
        pub coupon_period: i64 => "COUPONPERIOD",
        /// Issue size.
        pub issue_size: i64 => "ISSUESIZE",
        /// Face value currency.
        pub face_unit: String => "FACEUNIT",
        /// Buyback price.
        pub buyback_price: f64 => "BUYBACKPRICE",
        /// Buyback date.
        pub buyback_date: String => "BUYBACKDATE",
        /// ISIN code.
        pub isin: String => "ISIN",
        /// Latin name.
        pub lat_name: String => "LATNAME",
        /// Settlement currency.
        pub currency_id: String => "CURRENCYID",
        /// Listing level.
        pub list_level: i64 => "LISTLEVEL",
        /// Security type.
        pub sec_type: String => "SECTYPE",
        /// Coupon rate, percent.
        pub coupon_percent: f64 => "COUPONPERCENT",
        /// Offer date.
        pub offer_date: String => "OFFERDATE",
        /// Settlement date.
        pub settle_date: String => "SETTLEDATE",
        /// Face value of a lot.
        pub lot_value: f64 => "LOTVALUE",
    }
}

table_record! {
    /// Static description of an option series from the `securities` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct OptionInfo {
        /// Option code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Series name.
        pub short_name: String => "SHORTNAME",
        /// Full name.
        pub sec_name: String => "SECNAME",
        /// `C` for calls, `P` for puts.
        pub option_type: String => "OPTIONTYPE",
        /// Strike price.
        pub strike: f64 => "STRIKE",
        /// Central strike of the series.
        pub central_strike: f64 => "CENTRALSTRIKE",
        /// Previous day's settlement price.
        pub prev_settle_price: f64 => "PREVSETTLEPRICE",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
        /// Minimum price step.
        pub min_step: f64 => "MINSTEP",
        /// Last trading day.
        pub last_trade_date: String => "LASTTRADEDATE",
        /// Exercise day.
        pub last_del_date: String => "LASTDELDATE",
        /// Last price of the previous day.
        pub prev_price: f64 => "PREVPRICE",
        /// Price step value.
        pub step_price: f64 => "STEPPRICE",
        /// Latin name.
        pub lat_name: String => "LATNAME",
        /// Initial margin of an uncovered position.
        pub im_np: f64 => "IMNP",
        /// Initial margin of a synthetic position.
        pub im_p: f64 => "IMP",
        /// Initial margin of a bought option.
        pub im_buy: f64 => "IMBUY",
        /// Margin data timestamp.
        pub im_time: String => "IMTIME",
        /// Trade registration fee.
        pub buy_sell_fee: f64 => "BUYSELLFEE",
        /// Scalper trade fee.
        pub scalper_fee: f64 => "SCALPERFEE",
        /// Negotiated trade fee.
        pub negotiated_fee: f64 => "NEGOTIATEDFEE",
        /// Exercise fee.
        pub exercise_fee: f64 => "EXERCISEFEE",
        /// Underlying asset code.
        pub asset_code: String => "ASSETCODE",
        /// Underlying contract or share.
        pub underlying_asset: String => "UNDERLYINGASSET",
        /// `F` for a futures underlying, `S` for a share.
        pub underlying_type: String => "UNDERLYINGTYPE",
        /// Underlying settlement price.
        pub underlying_settle_price: f64 => "UNDERLYINGSETTLEPRICE",
    }
}

table_record! {
    /// Current market data of an option from the `marketdata` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct OptionData {
        /// Option code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Best bid.
        pub bid: f64 => "BID",
        /// Best offer.
        pub offer: f64 => "OFFER",
        /// Bid/offer spread.
        pub spread: f64 => "SPREAD",
        /// First trade price.
        pub open: f64 => "OPEN",
        /// Lowest trade price.
        pub low: f64 => "LOW",
        /// Highest trade price.
        pub high: f64 => "HIGH",
        /// Last trade price.
        pub last: f64 => "LAST",
        /// Last trade size in contracts.
        pub quantity: i64 => "QUANTITY",
        /// Change of the last price to the previous trade.
        pub last_change: f64 => "LASTCHANGE",
        /// Current settlement price.
        pub settle_price: f64 => "SETTLEPRICE",
        /// Change of the settlement price.
        pub settle_to_prev_settle: f64 => "SETTLETOPREVSETTLE",
        /// Change of the settlement price, percent.
        pub settle_to_prev_settle_prc: f64 => "SETTLETOPREVSETTLEPRC",
        /// Number of trades today.
        pub num_trades: i64 => "NUMTRADES",
        /// Volume today in contracts.
        pub vol_today: i64 => "VOLTODAY",
        /// Value today in rubles.
        pub val_today: f64 => "VALTODAY",
        /// Value today in US dollars.
        pub val_today_usd: f64 => "VALTODAY_USD",
        /// Bid volume at the best price.
        pub bid_depth: i64 => "BIDDEPTH",
        /// Total bid volume.
        pub bid_depth_total: i64 => "BIDDEPTHT",
        /// Number of bids.
        pub num_bids: i64 => "NUMBIDS",
        /// Offer volume at the best price.
        pub offer_depth: i64 => "OFFERDEPTH",
        /// Total offer volume.
        pub offer_depth_total: i64 => "OFFERDEPTHT",
        /// Number of offers.
        pub num_offers: i64 => "NUMOFFERS",
        /// Last update time.
        pub update_time: String => "UPDATETIME",
        /// Change of the last price to the previous trade, percent.
        pub last_change_prcnt: f64 => "LASTCHANGEPRCNT",
        /// Last trade time.
        pub time: String => "TIME",
        /// Update sequence number.
        pub seq_num: i64 => "SEQNUM",
        /// Load time.
        pub sys_time: String => "SYSTIME",
        /// Open interest in contracts.
        pub open_position: i64 => "OPENPOSITION",
        /// Change of open interest to the previous close.
        pub oi_change: i64 => "OICHANGE",
    }
}

table_record! {
    /// Description of a resolved ticker: the columns shares and futures share in their
    /// `securities` blocks. Fields of the other market stay empty.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct TickerInfo {
        /// Security or contract code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Short name; for futures the series, e.g. `RTS-9.24`.
        pub short_name: String => "SHORTNAME",
        /// Full name.
        pub sec_name: String => "SECNAME",
        /// Price precision.
        pub decimals: i64 => "DECIMALS",
        /// Minimum price step.
        pub min_step: f64 => "MINSTEP",
        /// Underlying units per contract (futures).
        pub lot_volume: i64 => "LOTVOLUME",
        /// Last trading day (futures).
        pub last_trade_date: String => "LASTTRADEDATE",
        /// Delivery day (futures).
        pub last_del_date: String => "LASTDELDATE",
        /// Security type.
        pub sec_type: String => "SECTYPE",
        /// Underlying asset code (futures).
        pub asset_code: String => "ASSETCODE",
        /// Price step value (futures).
        pub step_price: f64 => "STEPPRICE",
        /// Last price of the previous day.
        pub prev_price: f64 => "PREVPRICE",
        /// Face value (shares).
        pub face_value: f64 => "FACEVALUE",
        /// Listing level (shares).
        pub list_level: i64 => "LISTLEVEL",
    }
}

table_record! {
    /// Current market data of a resolved ticker from the `marketdata` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct TickerData {
        /// Security or contract code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Best bid.
        pub bid: f64 => "BID",
        /// Lots at the best bid.
        pub bid_depth: f64 => "BIDDEPTH",
        /// Best offer.
        pub offer: f64 => "OFFER",
        /// Lots at the best offer.
        pub offer_depth: f64 => "OFFERDEPTH",
        /// Bid/offer spread.
        pub spread: f64 => "SPREAD",
        /// Total bid volume in lots.
        pub bid_depth_total: i64 => "BIDDEPTHT",
        /// Total offer volume in lots.
        pub offer_depth_total: i64 => "OFFERDEPTHT",
        /// First trade price.
        pub open: f64 => "OPEN",
        /// Lowest trade price.
        pub low: f64 => "LOW",
        /// Highest trade price.
        pub high: f64 => "HIGH",
        /// Last trade price.
        pub last: f64 => "LAST",
        /// Change of the last price to the previous trade.
        pub last_change: f64 => "LASTCHANGE",
        /// Change of the last price to the previous trade, percent.
        pub last_change_prcnt: f64 => "LASTCHANGEPRCNT",
        /// Last trade size in lots.
        pub qty: i64 => "QTY",
        /// Last trade value.
        pub value: f64 => "VALUE",
        /// Weighted average price.
        pub wa_price: f64 => "WAPRICE",
        /// Number of trades today.
        pub num_trades: i64 => "NUMTRADES",
        /// Volume today in securities or contracts.
        pub vol_today: i64 => "VOLTODAY",
        /// Value today in settlement currency.
        pub val_today: i64 => "VALTODAY",
        /// Open interest in contracts (futures).
        pub open_position: f64 => "OPENPOSITION",
        /// Change of open interest to the previous close (futures).
        pub oi_change: i64 => "OICHANGE",
        /// Last update time.
        pub update_time: String => "UPDATETIME",
        /// Load time.
        pub sys_time: String => "SYSTIME",
        /// Trading session.
        pub trading_session: String => "TRADINGSESSION",
    }
}

table_record! {
    /// Daily option results from the `history` block.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct OptionHistory {
        /// Trading date.
        pub trade_date: String => "TRADEDATE",
        /// Option code.
        pub sec_id: String => "SECID",
        /// Board code.
        pub board_id: String => "BOARDID",
        /// Opening price.
        pub open: f64 => "OPEN",
        /// Lowest price.
        pub low: f64 => "LOW",
        /// Highest price.
        pub high: f64 => "HIGH",
        /// Last price.
        pub close: f64 => "CLOSE",
        /// Turnover in rubles.
        pub value: f64 => "VALUE",
        /// Turnover in contracts.
        pub volume: i64 => "VOLUME",
        /// Open interest value in rubles.
        pub open_position_value: f64 => "OPENPOSITIONVALUE",
        /// Open interest in contracts.
        pub open_position: i64 => "OPENPOSITION",
        /// Settlement price.
        pub settle_price: f64 => "SETTLEPRICE",
        /// Weighted average price.
        pub wa_price: f64 => "WAPRICE",
        /// Theoretical price at the day clearing.
        pub settle_price_day: f64 => "SETTLEPRICEDAY",
        /// Change to the previous day's last price, percent.
        pub change: f64 => "CHANGE",
        /// Last trade size in contracts.
        pub qty: i64 => "QTY",
        /// Number of trades.
        pub num_trades: i64 => "NUMTRADES",
    }
}

table_record! {
    /// Futures open interest by client group from the AlgoPack `futoi` dataset.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct FutOi {
        /// Trading session number.
        pub sess_id: i64,
        /// Data packet number.
        pub seqnum: i64,
        /// Trading date.
        pub tradedate: String,
        /// Time of the last trade included.
        pub tradetime: String,
        /// Two-letter contract code.
        pub ticker: String,
        /// Client group, `fiz` or `yur`.
        pub clgroup: String,
        /// Open positions.
        pub pos: i64,
        /// Long open positions.
        pub pos_long: i64,
        /// Short open positions.
        pub pos_short: i64,
        /// Number of holders of long positions.
        pub pos_long_num: i64,
        /// Number of holders of short positions.
        pub pos_short_num: i64,
        /// Publication time.
        pub systime: String,
    }
}

table_record! {
    /// Paging metadata from a `<block>.cursor` table.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct HistoryCursor {
        /// Offset of the current page.
        pub index: i64 => "INDEX",
        /// Total number of rows.
        pub total: i64 => "TOTAL",
        /// Rows per page.
        pub page_size: i64 => "PAGESIZE",
    }
}

impl HistoryCursor {
    /// Returns true if rows remain after the page ending at `offset`.
    #[must_use]
    pub const fn has_more(&self, offset: usize) -> bool {
        (offset as i64) < self.total
    }
}
