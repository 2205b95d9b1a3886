// =============================================================================
// Pipeline error types
// =============================================================================
//
// Every failure inside the indicator pipeline is terminal for the run that
// encountered it: no partial results, no retries, no logged-and-continued
// fallbacks.  Callers always receive one of the kinds below and decide for
// themselves whether to retry the whole invocation.
// =============================================================================

use thiserror::Error;

/// Errors produced by the indicator / alignment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// The input series is shorter than the requested period allows.
    #[error("insufficient data: required {required} points, got {actual}")]
    InsufficientData {
        /// Minimum number of points the operation needs.
        required: usize,
        /// Number of points actually supplied.
        actual: usize,
    },

    /// Series positions are not strictly increasing and contiguous.
    #[error("malformed series: expected position {expected} at index {index}, found {found}")]
    MalformedSeries {
        /// Index within the series where the violation was detected.
        index: usize,
        /// The position value the contiguity invariant demands.
        expected: u64,
        /// The position value actually present.
        found: u64,
    },

    /// A gap was found in a series that must be fully populated.
    ///
    /// The RSI engine consumes raw observations; an absent value there is a
    /// broken input, not a warm-up gap.
    #[error("absent value at position {position}: oscillator input must be fully populated")]
    AbsentValue {
        /// Position of the offending point.
        position: u64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndicatorError>;
