// =============================================================================
// Shared series model
// =============================================================================
//
// Every stage of the pipeline speaks `SeriesPoint`: a logical position paired
// with an optional value.  `value == None` means "no computed value at this
// position" (warm-up gap or trailing padding) and must survive every
// downstream stage untouched — it is never coerced to zero or NaN.
//
// A well-formed series has strictly increasing, contiguous positions:
//   s[i].position == s[0].position + i
// even where values are absent.  Positions are opaque logical indices; the
// caller maps them to wall-clock time outside the pipeline.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// One point of a series: a logical position and an optional value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Monotonically increasing logical index (not wall-clock time).
    pub position: u64,
    /// The computed value, or `None` for a warm-up gap / padding point.
    pub value: Option<f64>,
}

impl SeriesPoint {
    /// A point carrying a value.
    pub fn present(position: u64, value: f64) -> Self {
        Self {
            position,
            value: Some(value),
        }
    }

    /// A gap point — position exists, value does not.
    pub fn absent(position: u64) -> Self {
        Self {
            position,
            value: None,
        }
    }
}

/// Build a raw input series from closing prices, with positions `0..n`.
///
/// This is the shape the price-feed collaborator hands over: one point per
/// observation, every value present.
pub fn from_closes(closes: &[f64]) -> Vec<SeriesPoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| SeriesPoint::present(i as u64, c))
        .collect()
}

/// Validate the contiguity invariant: positions strictly increasing with
/// step 1.  Fails fast with `MalformedSeries` before any computation runs.
///
/// An empty series is trivially well-formed; length requirements are enforced
/// separately by each engine.
pub fn validate(series: &[SeriesPoint]) -> Result<()> {
    let Some(first) = series.first() else {
        return Ok(());
    };
    for (i, point) in series.iter().enumerate() {
        let expected = first.position + i as u64;
        if point.position != expected {
            return Err(IndicatorError::MalformedSeries {
                index: i,
                expected,
                found: point.position,
            });
        }
    }
    Ok(())
}

/// Index of the first point carrying a value, if any.
pub fn first_present(series: &[SeriesPoint]) -> Option<usize> {
    series.iter().position(|p| p.value.is_some())
}
