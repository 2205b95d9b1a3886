// =============================================================================
// Indicator Engines
// =============================================================================
//
// Pure, side-effect-free implementations of the oscillator and its overlays.
// Every engine consumes an ordered series, returns a brand-new series, and
// reports failures through `Result` — insufficient data and malformed inputs
// are terminal, never papered over.

pub mod ema;
pub mod rsi;
pub mod wma;
