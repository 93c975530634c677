//! Order book errors.

use thiserror::Error;

use crate::Side;

/// Errors returned by order book queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// The requested side of the book has no levels.
    #[error("No {side} levels in the order book")]
    NotFound {
        /// The empty side.
        side: Side,
    },

    /// The sequence number and update time do not form a valid instant.
    #[error("Cannot build a timestamp from SEQNUM {seq_num} and UPDATETIME '{update_time}'")]
    InvalidTimestamp {
        /// Sequence number carried by the book.
        seq_num: i64,
        /// Time of day carried by the book.
        update_time: String,
    },
}
