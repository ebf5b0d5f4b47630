//! Rate-statistic helpers.
//!
//! All published rates are rounded to three decimal places, rounding halves
//! up on the value scaled by 1000. Division by an empty denominator yields
//! `None`: an empty sample is a valid state, not an error.

/// Round to the nearest thousandth, halves up.
pub fn round3(raw: f64) -> f64 {
    (raw * 1000.0).round() / 1000.0
}

/// Unrounded ratio, `None` when the denominator is zero.
pub fn raw_rate(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Ratio rounded to three decimals, `None` when the denominator is zero.
pub fn rate(numerator: u64, denominator: u64) -> Option<f64> {
    raw_rate(numerator, denominator).map(round3)
}
