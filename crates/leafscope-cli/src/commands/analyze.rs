use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use leafscope_core::io::{load_color_image, save_color_png};
use leafscope_core::{AnalysisResult, VegetationPipeline};
use rayon::prelude::*;
use tracing::warn;

use crate::summary::{print_analysis_summary, print_batch_table};

use super::{load_pipeline, unique_output_stems};

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image files (PNG, JPEG, TIFF, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Calibration config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for false-color, overlay and report files
    #[arg(short, long, default_value = "results")]
    pub output_dir: PathBuf,

    /// Report file format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Only print results, write nothing
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let pipeline = load_pipeline(args.config.as_deref())?;

    if !args.dry_run {
        std::fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("Failed to create output directory {}", args.output_dir.display())
        })?;
    }

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Analyzing");

    // Stems are fixed before fan-out so same-named inputs never share outputs.
    let stems = unique_output_stems(&args.files);

    // Each file is an independent call on the shared, immutable pipeline.
    let results: Vec<(PathBuf, Result<AnalysisResult>)> = args
        .files
        .par_iter()
        .zip(stems.par_iter())
        .map(|(file, stem)| {
            let result = analyze_file(&pipeline, file, stem, args);
            pb.inc(1);
            (file.clone(), result)
        })
        .collect();

    pb.finish_with_message("Done");

    let mut failures = 0usize;
    let mut scored = Vec::new();
    for (file, result) in results {
        match result {
            Ok(analysis) => {
                print_analysis_summary(&file, &analysis);
                scored.push((file, analysis));
            }
            Err(e) => {
                failures += 1;
                warn!(file = %file.display(), "Analysis failed");
                eprintln!("{}: {:#}", file.display(), e);
            }
        }
    }

    if scored.len() > 1 {
        print_batch_table(&scored);
    }
    if !args.dry_run && !scored.is_empty() {
        println!("\nResults saved to {}", args.output_dir.display());
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed", args.files.len());
    }
    Ok(())
}

fn analyze_file(
    pipeline: &VegetationPipeline,
    file: &Path,
    stem: &str,
    args: &AnalyzeArgs,
) -> Result<AnalysisResult> {
    let frame = load_color_image(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let output = pipeline
        .run(&frame)
        .with_context(|| format!("Failed to process {}", file.display()))?;

    if args.dry_run {
        return Ok(output.analysis);
    }

    let dir = &args.output_dir;
    save_color_png(&output.false_color, &dir.join(format!("{stem}-false-color.png")))?;
    save_color_png(&output.overlay, &dir.join(format!("{stem}-overlay.png")))?;
    write_report(&output.analysis, file, dir, stem, args.format)?;

    Ok(output.analysis)
}

fn write_report(
    analysis: &AnalysisResult,
    source: &Path,
    dir: &Path,
    stem: &str,
    format: ReportFormat,
) -> Result<()> {
    let (path, contents) = match format {
        ReportFormat::Text => (
            dir.join(format!("{stem}-analysis.txt")),
            format!("Vegetation analysis of {}\n\n{}\n", source.display(), analysis),
        ),
        ReportFormat::Json => (
            dir.join(format!("{stem}-analysis.json")),
            serde_json::to_string_pretty(analysis)?,
        ),
    };
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(())
}
