// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives exponentially decreasing weight to older observations:
//   multiplier = 2 / (period + 1)
//   ema_t      = (value_t - ema_{t-1}) * multiplier + ema_{t-1}
//
// The first output is seeded with the simple average of the first `period`
// values and emitted at the seed point's position.
//
// Gap handling: points with an absent value are skipped entirely — they do
// not count toward `period` and do not participate in the recurrence.  This
// mirrors the upstream reference behaviour; note the hazard that an input
// with interior gaps yields output positions that are no longer contiguous.
// In this pipeline the EMA consumes RSI output, which is always fully
// populated, so the hazard does not bite.
// =============================================================================

use crate::error::{IndicatorError, Result};
use crate::series::SeriesPoint;

/// Compute the EMA series for `series` with the given look-back `period`.
///
/// For a fully present input the output has `series.len() - period + 1`
/// points, the first at `series[period - 1].position`.
///
/// # Errors
/// - `InsufficientData` when fewer than `period` present points exist.
/// - `MalformedSeries` when positions are not contiguous and increasing.
pub fn compute(series: &[SeriesPoint], period: usize) -> Result<Vec<SeriesPoint>> {
    crate::series::validate(series)?;

    // Absent points are not counted toward the period.
    let present: Vec<(u64, f64)> = series
        .iter()
        .filter_map(|p| p.value.map(|v| (p.position, v)))
        .collect();

    if period == 0 || present.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period.max(1),
            actual: present.len(),
        });
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: simple average of the first `period` present values.
    let seed: f64 = present[..period].iter().map(|(_, v)| v).sum::<f64>() / period as f64;
    let (seed_position, _) = present[period - 1];

    let mut result = Vec::with_capacity(present.len() - period + 1);
    result.push(SeriesPoint::present(seed_position, seed));

    let mut prev = seed;
    for &(position, value) in &present[period..] {
        prev = (value - prev) * multiplier + prev;
        result.push(SeriesPoint::present(position, prev));
    }

    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::from_closes;

    #[test]
    fn ema_insufficient_data() {
        let s = from_closes(&[1.0, 2.0]);
        let err = compute(&s, 5).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientData {
                required: 5,
                actual: 2,
            }
        );
    }

    #[test]
    fn ema_period_zero_rejected() {
        let s = from_closes(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            compute(&s, 0),
            Err(IndicatorError::InsufficientData { required: 1, .. })
        ));
    }

    #[test]
    fn ema_period_equals_length() {
        let s = from_closes(&[2.0, 4.0, 6.0]);
        let ema = compute(&s, 3).unwrap();
        assert_eq!(ema.len(), 1);
        assert_eq!(ema[0].position, 2);
        // Seed is the SMA: (2 + 4 + 6) / 3 = 4.0.
        assert!((ema[0].value.unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of 1..10: seed SMA = 3.0, multiplier = 1/3.
        let s = from_closes(&(1..=10).map(|x| x as f64).collect::<Vec<_>>());
        let ema = compute(&s, 5).unwrap();
        assert_eq!(ema.len(), 6);
        assert_eq!(ema[0].position, 4);

        let mult = 2.0 / 6.0;
        let mut expected = 3.0;
        assert!((ema[0].value.unwrap() - expected).abs() < 1e-10);
        for (p, c) in ema[1..].iter().zip(6..=10) {
            expected = (c as f64 - expected) * mult + expected;
            assert!((p.value.unwrap() - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn ema_length_invariant() {
        // Fully present input: len - period + 1 outputs, step-1 positions.
        let s = from_closes(&(0..40).map(|x| (x as f64).cos()).collect::<Vec<_>>());
        let ema = compute(&s, 9).unwrap();
        assert_eq!(ema.len(), 40 - 9 + 1);
        for (i, p) in ema.iter().enumerate() {
            assert_eq!(p.position, 8 + i as u64);
        }
    }

    #[test]
    fn ema_skips_absent_points() {
        // A leading gap is not counted toward the period: the seed moves one
        // point later and averages only present values.
        let mut s = from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        s[0].value = None;
        let ema = compute(&s, 3).unwrap();
        assert_eq!(ema.len(), 2);
        assert_eq!(ema[0].position, 3);
        assert!((ema[0].value.unwrap() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn ema_all_absent_is_insufficient() {
        let s: Vec<SeriesPoint> = (0..10).map(SeriesPoint::absent).collect();
        assert!(matches!(
            compute(&s, 3),
            Err(IndicatorError::InsufficientData { actual: 0, .. })
        ));
    }
}
