//! Decimal-precision rounding for dimension comparisons.
//!
//! All geometric acceptance tests compare coordinates rounded to a
//! configured number of decimal places. At any precision, boxes that merely
//! touch along a shared face (zero gap) are not treated as overlapping.

/// Rounds a value to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
