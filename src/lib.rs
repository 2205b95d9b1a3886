// =============================================================================
// rsi-overlay — RSI oscillator with EMA/WMA overlays in one coordinate space
// =============================================================================
//
// Ingests a sequence of price observations and derives a [0, 100] momentum
// oscillator (Wilder RSI) plus two smoothed overlays of that oscillator (an
// exponential and a linearly-weighted moving average), then reconciles the
// three series — each with its own warm-up offset — into congruent,
// index-aligned series with explicit gaps, ready for plotting.
//
// The crate is the computation core only.  Fetching prices, serving HTTP and
// rasterizing charts are external collaborators: callers hand in an ordered
// `(position, value)` series and receive three aligned series back.
//
// Typical use:
//   let pipeline = OverlayPipeline::new(PipelineConfig::default());
//   let overlays = pipeline.run_closes(&closes)?;
// =============================================================================

pub mod align;
pub mod config;
pub mod error;
pub mod indicators;
pub mod pipeline;
pub mod series;

pub use align::AlignedOverlays;
pub use config::PipelineConfig;
pub use error::{IndicatorError, Result};
pub use pipeline::OverlayPipeline;
pub use series::SeriesPoint;
