//! Intervals command implementation.

use moexiss_lib::prelude::*;

/// List candle intervals with their wire codes.
pub(crate) fn list_intervals() {
    println!("{:<8} {:<6}", "NAME", "CODE");
    println!("{}", "-".repeat(15));

    for interval in Interval::all() {
        println!("{:<8} {:<6}", interval.as_str(), interval.code());
    }
}
