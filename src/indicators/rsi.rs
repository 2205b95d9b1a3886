// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI converts a raw value series into a bounded [0, 100] oscillator from the
// ratio of average gains to average losses.
//
// Step 1 — Seed: sum positive deltas (gains) and magnitudes of negative
//          deltas (losses) over the first `period` transitions, then divide
//          by `period` to get the starting averages.
// Step 2 — Wilder's smoothing for every later delta:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// A delta of exactly zero counts as a gain of zero, never as a loss.  The
// recurrence is inherently sequential — each value depends on the previous
// averages — so it is expressed as a fold over ordered deltas rather than
// indexed random access.
// =============================================================================

use crate::error::{IndicatorError, Result};
use crate::series::SeriesPoint;

/// Wilder smoothing state carried through the recurrence.
struct WilderState {
    avg_gain: f64,
    avg_loss: f64,
}

impl WilderState {
    /// Fold one delta into the smoothed averages.
    fn step(&mut self, delta: f64, period: f64) {
        let (gain, loss) = if delta >= 0.0 {
            (delta, 0.0)
        } else {
            (0.0, delta.abs())
        };
        self.avg_gain = (self.avg_gain * (period - 1.0) + gain) / period;
        self.avg_loss = (self.avg_loss * (period - 1.0) + loss) / period;
    }

    /// Current RSI from the smoothed averages.
    ///
    /// When `avg_loss` is zero the textbook ratio is undefined; this crate
    /// clamps by convention: 100 when only gains were seen, 50 when there was
    /// no movement at all.
    fn rsi(&self) -> f64 {
        if self.avg_loss == 0.0 {
            if self.avg_gain == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            let rs = self.avg_gain / self.avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        }
    }
}

/// Compute the RSI series for `series` with the given look-back `period`.
///
/// The first `period` transitions seed the averages, so the output has
/// `series.len() - period` points and starts at `series[period].position`.
/// Every output value is present.
///
/// # Errors
/// - `InsufficientData` when `series.len() <= period` (need `period` deltas
///   plus one point to emit).
/// - `MalformedSeries` when positions are not contiguous and increasing.
/// - `AbsentValue` when any input point carries no value — the oscillator
///   input is the raw observation series and must be fully populated.
pub fn compute(series: &[SeriesPoint], period: usize) -> Result<Vec<SeriesPoint>> {
    crate::series::validate(series)?;
    if period == 0 || series.len() <= period {
        return Err(IndicatorError::InsufficientData {
            required: (period + 1).max(2),
            actual: series.len(),
        });
    }

    let values = unwrap_values(series)?;
    let period_f = period as f64;

    // --- Seed averages over the first `period` deltas ------------------------
    let (gains, losses) = values[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(g, l), d| {
            if d >= 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let mut state = WilderState {
        avg_gain: gains / period_f,
        avg_loss: losses / period_f,
    };

    let mut result = Vec::with_capacity(series.len() - period);
    result.push(SeriesPoint::present(series[period].position, state.rsi()));

    // --- Wilder recurrence over the remaining deltas -------------------------
    for (window, point) in values[period..].windows(2).zip(&series[period + 1..]) {
        state.step(window[1] - window[0], period_f);
        result.push(SeriesPoint::present(point.position, state.rsi()));
    }

    Ok(result)
}

/// Extract the raw values, rejecting gaps.
fn unwrap_values(series: &[SeriesPoint]) -> Result<Vec<f64>> {
    series
        .iter()
        .map(|p| {
            p.value
                .ok_or(IndicatorError::AbsentValue { position: p.position })
        })
        .collect()
}
