// =============================================================================
// Overlay Pipeline — raw closes to three congruent plot series
// =============================================================================
//
// End-to-end orchestration:
//   1. Validate the raw input series
//   2. RSI over the raw values
//   3. EMA and WMA over the RSI output
//   4. Alignment / padding stage
//
// Data flows strictly forward; every stage allocates a fresh series and the
// pipeline holds nothing but its immutable parameters, so concurrent runs
// never interact.
// =============================================================================

use tracing::debug;

use crate::align::{self, AlignedOverlays};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::indicators::{ema, rsi, wma};
use crate::series::{self, SeriesPoint};

/// The full indicator pipeline, parameterised once at construction.
///
/// A pure function of its input: safe to share and to call from concurrent
/// contexts without locking.
#[derive(Debug, Clone, Copy)]
pub struct OverlayPipeline {
    config: PipelineConfig,
}

impl OverlayPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The parameters this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline over a raw observation series.
    ///
    /// Any error is terminal for the run: no partial output is produced.
    pub fn run(&self, raw: &[SeriesPoint]) -> Result<AlignedOverlays> {
        series::validate(raw)?;

        let rsi_series = rsi::compute(raw, self.config.rsi_period)?;
        debug!(
            input_len = raw.len(),
            rsi_len = rsi_series.len(),
            "Computed RSI series"
        );

        let ema_series = ema::compute(&rsi_series, self.config.ema_period)?;
        let wma_series = wma::compute(&rsi_series, self.config.wma_period)?;
        debug!(
            ema_len = ema_series.len(),
            wma_len = wma_series.len(),
            "Computed overlay series"
        );

        let aligned = align::align_overlays(
            &rsi_series,
            &ema_series,
            &wma_series,
            self.config.trailing_pad,
        )?;
        debug!(aligned_len = aligned.rsi.len(), "Aligned output series");

        Ok(aligned)
    }

    /// Convenience wrapper: build the raw series from bare closing prices
    /// (positions `0..n`) and run the pipeline.
    pub fn run_closes(&self, closes: &[f64]) -> Result<AlignedOverlays> {
        self.run(&series::from_closes(closes))
    }
}
