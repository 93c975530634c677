//! CLI command implementations.

pub(crate) mod candles;
pub(crate) mod history;
pub(crate) mod intervals;
pub(crate) mod orderbook;
pub(crate) mod securities;
pub(crate) mod ticker;
