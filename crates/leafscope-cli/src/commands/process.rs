use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use leafscope_core::io::{load_color_image, save_color_image};

use super::load_pipeline;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input image file
    pub file: PathBuf,

    /// Calibration config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "false-color.png")]
    pub output: PathBuf,
}

pub fn run(args: &ProcessArgs) -> Result<()> {
    let pipeline = load_pipeline(args.config.as_deref())?;

    let frame = load_color_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", frame.width(), frame.height());

    let false_color = pipeline.process(&frame)?;

    save_color_image(&false_color, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
