// =============================================================================
// Weighted Moving Average (WMA)
// =============================================================================
//
// Linearly decreasing weights over a fixed window, no recursion.  For the
// window ending at index i, the j-th point back carries weight `period - j`
// (most recent = `period`, oldest = 1); the divisor is the triangular number
// `period * (period + 1) / 2`.
//
// Gap handling is absent-in, absent-out: a window containing any absent value
// emits an absent point at that position.  The check is explicit — absence
// never leaks into the weighted sum as NaN.
// =============================================================================

use crate::error::{IndicatorError, Result};
use crate::series::SeriesPoint;

/// Compute the WMA series for `series` with the given window `period`.
///
/// One output per window of `period` consecutive points: the output has
/// `series.len() - period + 1` points, the first at
/// `series[period - 1].position`, and stays gap-aware (tainted windows emit
/// absent points).
///
/// # Errors
/// - `InsufficientData` when `series.len() < period` or `period == 0`.
/// - `MalformedSeries` when positions are not contiguous and increasing.
pub fn compute(series: &[SeriesPoint], period: usize) -> Result<Vec<SeriesPoint>> {
    crate::series::validate(series)?;
    if period == 0 || series.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period.max(1),
            actual: series.len(),
        });
    }

    let denominator = (period * (period + 1) / 2) as f64;

    let result = series
        .windows(period)
        .map(|window| {
            let position = window[period - 1].position;
            match weighted_sum(window, period) {
                Some(sum) => SeriesPoint::present(position, sum / denominator),
                None => SeriesPoint::absent(position),
            }
        })
        .collect();

    Ok(result)
}

/// Weighted sum of one window, or `None` if any point is absent.
fn weighted_sum(window: &[SeriesPoint], period: usize) -> Option<f64> {
    let mut sum = 0.0;
    for (j, point) in window.iter().rev().enumerate() {
        sum += point.value? * (period - j) as f64;
    }
    Some(sum)
}
