// =============================================================================
// rsi-overlay — stdin/stdout glue around the pipeline
// =============================================================================
//
// Thin collaborator shell: reads a raw close-price series as JSON (from a
// file argument or stdin), runs the indicator pipeline and writes the three
// aligned series as JSON to stdout.  All real work lives in the library; this
// binary only wires configuration, logging and serialization together.
//
// Input is either bare closes `[100.0, 102.0, ...]` or explicit points
// `[{"position": 0, "value": 100.0}, ...]`.
// =============================================================================

use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rsi_overlay::{series, OverlayPipeline, PipelineConfig, SeriesPoint};

/// Path of the optional parameter file, overridable via environment.
const CONFIG_ENV: &str = "RSI_OVERLAY_CONFIG";
const CONFIG_PATH: &str = "pipeline_config.json";

/// The two accepted input shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Closes(Vec<f64>),
    Points(Vec<SeriesPoint>),
}

impl RawInput {
    fn into_series(self) -> Vec<SeriesPoint> {
        match self {
            Self::Closes(closes) => series::from_closes(&closes),
            Self::Points(points) => points,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
    let config = PipelineConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        PipelineConfig::default()
    });

    let raw = read_input().context("failed to read input series")?;
    let input = raw.into_series();
    info!(points = input.len(), "Running overlay pipeline");

    let overlays = OverlayPipeline::new(config)
        .run(&input)
        .context("pipeline run failed")?;

    serde_json::to_writer(std::io::stdout().lock(), &overlays)
        .context("failed to write output series")?;
    println!();

    Ok(())
}

/// Read the raw series from the first CLI argument (a file path) or stdin.
fn read_input() -> Result<RawInput> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read input file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input is not a valid series")
}
