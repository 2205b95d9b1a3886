// =============================================================================
// Alignment / Padding Stage
// =============================================================================
//
// The three engines emit series of different lengths: each has its own
// warm-up, so EMA(RSI) and WMA(RSI) start later than the RSI itself.  This
// stage reconciles them into three congruent series sharing one position
// index:
//
//   1. Left-pad each overlay with absent points until it matches the RSI
//      length, borrowing the RSI series' earliest positions.
//   2. Locate each padded series' first present value.
//   3. Append a trailing margin of absent points to all three, positions
//      continuing from the last RSI position.
//   4. Truncate all three from the later of the two overlay start indices,
//      dropping the leading region where either overlay still lacks a value.
//
// Post-condition: equal lengths and, for every index i,
//   rsi[i].position == ema[i].position == wma[i].position.
//
// The index arithmetic here is the most error-prone part of the pipeline,
// which is why it lives in its own stage with its own tests instead of being
// scattered through rendering glue.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::series::{self, SeriesPoint};

/// The pipeline's terminal output: three congruent, gap-aware series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedOverlays {
    /// The oscillator itself.
    pub rsi: Vec<SeriesPoint>,
    /// Exponential moving average of the oscillator.
    pub ema: Vec<SeriesPoint>,
    /// Weighted moving average of the oscillator.
    pub wma: Vec<SeriesPoint>,
}

/// Reconcile the RSI series and its two overlays into congruent series, then
/// append `trailing_pad` absent points of display margin.
///
/// # Errors
/// - `InsufficientData` when an overlay is longer than the RSI series it was
///   derived from, or when an overlay has no present value at all (nothing
///   would survive truncation).
/// - `MalformedSeries` when any input breaks the contiguity invariant or an
///   overlay's positions do not line up with the RSI tail.
pub fn align_overlays(
    rsi: &[SeriesPoint],
    ema: &[SeriesPoint],
    wma: &[SeriesPoint],
    trailing_pad: usize,
) -> Result<AlignedOverlays> {
    series::validate(rsi)?;

    let mut ema = pad_start_to_match(rsi, ema)?;
    let mut wma = pad_start_to_match(rsi, wma)?;
    let mut rsi = rsi.to_vec();

    let ema_start = series::first_present(&ema).ok_or(IndicatorError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let wma_start = series::first_present(&wma).ok_or(IndicatorError::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    // Trailing display margin: positions continue monotonically from the
    // last RSI position.
    if let Some(last) = rsi.last().copied() {
        for i in 1..=trailing_pad as u64 {
            let position = last.position + i;
            rsi.push(SeriesPoint::absent(position));
            ema.push(SeriesPoint::absent(position));
            wma.push(SeriesPoint::absent(position));
        }
    }

    // Drop the common leading region where either overlay is still warming up.
    let start = ema_start.max(wma_start);
    rsi.drain(..start);
    ema.drain(..start);
    wma.drain(..start);

    Ok(AlignedOverlays { rsi, ema, wma })
}

/// Left-pad `derived` with absent points so it aligns positionally with
/// `reference`, taking pad positions from the reference's earliest points.
///
/// The padded result is re-validated: if the derived series' positions do not
/// continue exactly where the pad ends, the combination is malformed.
fn pad_start_to_match(
    reference: &[SeriesPoint],
    derived: &[SeriesPoint],
) -> Result<Vec<SeriesPoint>> {
    if derived.len() > reference.len() {
        return Err(IndicatorError::InsufficientData {
            required: derived.len(),
            actual: reference.len(),
        });
    }

    let pad_len = reference.len() - derived.len();
    let mut padded: Vec<SeriesPoint> = reference[..pad_len]
        .iter()
        .map(|p| SeriesPoint::absent(p.position))
        .collect();
    padded.extend_from_slice(derived);
    series::validate(&padded)?;
    Ok(padded)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Build a fully present series of `len` points starting at `start`.
    fn present_series(start: u64, len: usize) -> Vec<SeriesPoint> {
        (0..len)
            .map(|i| SeriesPoint::present(start + i as u64, i as f64))
            .collect()
    }

    #[test]
    fn pad_start_borrows_reference_positions() {
        let reference = present_series(14, 10);
        let derived = present_series(18, 6);
        let padded = pad_start_to_match(&reference, &derived).unwrap();
        assert_eq!(padded.len(), 10);
        for (i, p) in padded.iter().enumerate() {
            assert_eq!(p.position, 14 + i as u64);
            assert_eq!(p.value.is_some(), i >= 4);
        }
    }

    #[test]
    fn pad_start_rejects_longer_derived() {
        let reference = present_series(0, 3);
        let derived = present_series(0, 5);
        assert!(matches!(
            pad_start_to_match(&reference, &derived),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn pad_start_rejects_misaligned_derived() {
        // Derived starts at the wrong position: the pad ends at 17 but the
        // derived series resumes at 19.
        let reference = present_series(14, 10);
        let derived = present_series(19, 6);
        assert!(matches!(
            pad_start_to_match(&reference, &derived),
            Err(IndicatorError::MalformedSeries { .. })
        ));
    }

    #[test]
    fn align_produces_congruent_series() {
        // RSI of 60 points at 14..74; EMA warms up 8 more, WMA 44 more.
        let rsi = present_series(14, 60);
        let ema = present_series(22, 52);
        let wma = present_series(58, 16);
        let out = align_overlays(&rsi, &ema, &wma, 50).unwrap();

        assert_eq!(out.rsi.len(), out.ema.len());
        assert_eq!(out.rsi.len(), out.wma.len());
        for i in 0..out.rsi.len() {
            assert_eq!(out.rsi[i].position, out.ema[i].position);
            assert_eq!(out.rsi[i].position, out.wma[i].position);
        }

        // Truncation starts where the slower overlay (WMA) first has a value.
        assert_eq!(out.rsi[0].position, 58);
        assert!(out.wma[0].value.is_some());
        assert!(out.ema[0].value.is_some());
        // 60 points - 44 truncated + 50 trailing margin.
        assert_eq!(out.rsi.len(), 16 + 50);
    }

    #[test]
    fn align_appends_trailing_margin() {
        let rsi = present_series(14, 60);
        let ema = present_series(22, 52);
        let wma = present_series(58, 16);
        let out = align_overlays(&rsi, &ema, &wma, 50).unwrap();

        // The last RSI position was 73; margin runs 74..=123, all absent.
        let margin = &out.rsi[out.rsi.len() - 50..];
        for (i, p) in margin.iter().enumerate() {
            assert_eq!(p.position, 74 + i as u64);
            assert!(p.value.is_none());
        }
        assert!(out.ema[out.ema.len() - 1].value.is_none());
        assert!(out.wma[out.wma.len() - 1].value.is_none());
    }

    #[test]
    fn align_zero_trailing_pad() {
        let rsi = present_series(0, 10);
        let ema = present_series(2, 8);
        let wma = present_series(5, 5);
        let out = align_overlays(&rsi, &ema, &wma, 0).unwrap();
        assert_eq!(out.rsi.len(), 5);
        assert_eq!(out.rsi[0].position, 5);
    }

    #[test]
    fn align_positions_stay_contiguous() {
        let rsi = present_series(14, 60);
        let ema = present_series(22, 52);
        let wma = present_series(58, 16);
        let out = align_overlays(&rsi, &ema, &wma, 50).unwrap();
        crate::series::validate(&out.rsi).unwrap();
        crate::series::validate(&out.ema).unwrap();
        crate::series::validate(&out.wma).unwrap();
    }

    #[test]
    fn align_rejects_fully_absent_overlay() {
        let rsi = present_series(0, 10);
        let ema = present_series(2, 8);
        let wma: Vec<SeriesPoint> = (0..10).map(SeriesPoint::absent).collect();
        assert!(matches!(
            align_overlays(&rsi, &ema, &wma, 10),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn align_preserves_interior_gaps() {
        // A tainted WMA window mid-series must stay absent after alignment.
        let rsi = present_series(0, 12);
        let ema = present_series(2, 10);
        let mut wma = present_series(4, 8);
        wma[3].value = None;
        let out = align_overlays(&rsi, &ema, &wma, 0).unwrap();
        let gap = out.wma.iter().find(|p| p.position == 7).unwrap();
        assert!(gap.value.is_none());
    }
}
