// =============================================================================
// Pipeline Configuration — Indicator parameters with serde defaults
// =============================================================================
//
// The parameter set is the pipeline's only configuration surface.  Every
// field carries a serde default so that a JSON file missing newer fields
// still deserialises, and a missing or unreadable file falls back to the
// defaults entirely (the caller decides whether that is acceptable).
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_rsi_period() -> usize {
    14
}

fn default_ema_period() -> usize {
    9
}

fn default_wma_period() -> usize {
    45
}

fn default_trailing_pad() -> usize {
    50
}

// =============================================================================
// PipelineConfig
// =============================================================================

/// Immutable indicator parameters for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Look-back period for the RSI oscillator.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Period of the exponential moving average applied to the RSI.
    #[serde(default = "default_ema_period")]
    pub ema_period: usize,

    /// Window of the weighted moving average applied to the RSI.
    #[serde(default = "default_wma_period")]
    pub wma_period: usize,

    /// Number of absent points appended after the last observation so the
    /// plotted series has trailing breathing room.
    #[serde(default = "default_trailing_pad")]
    pub trailing_pad: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            ema_period: default_ema_period(),
            wma_period: default_wma_period(),
            trailing_pad: default_trailing_pad(),
        }
    }
}

impl PipelineConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(
            rsi_period = config.rsi_period,
            ema_period = config.ema_period,
            wma_period = config.wma_period,
            trailing_pad = config.trailing_pad,
            "Loaded pipeline config"
        );
        Ok(config)
    }
}
