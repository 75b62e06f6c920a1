use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use drift_core::io::load_grid;
use drift_core::track::{find_translation_configured, SearchConfig};

#[derive(Args)]
pub struct TrackArgs {
    /// Reference image
    pub image_a: PathBuf,

    /// Image to compare against the reference
    pub image_b: PathBuf,

    /// Maximum displacement searched on the x axis (0 = full width)
    #[arg(long)]
    pub x_gate: Option<f64>,

    /// Maximum displacement searched on the y axis (0 = full height)
    #[arg(long)]
    pub y_gate: Option<f64>,

    /// Number of search workers (default: all hardware threads)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Read search parameters from a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &TrackArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str::<SearchConfig>(&text)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        }
        None => SearchConfig::default(),
    };

    // Explicit flags win over the config file.
    if let Some(x_gate) = args.x_gate {
        config.x_gate = x_gate;
    }
    if let Some(y_gate) = args.y_gate {
        config.y_gate = y_gate;
    }
    if let Some(workers) = args.workers {
        config.workers = Some(workers);
    }

    tracing::debug!(
        x_gate = config.x_gate,
        y_gate = config.y_gate,
        workers = ?config.workers,
        "resolved search parameters"
    );

    let a = load_grid(&args.image_a)?;
    let b = load_grid(&args.image_b)?;
    let motion = find_translation_configured(&a, &b, &config)?;

    println!("dx:         {}", motion.dx);
    println!("dy:         {}", motion.dy);
    println!("difference: {:.6}", motion.difference);

    Ok(())
}
