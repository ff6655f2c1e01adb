pub mod analyze;
pub mod config;
pub mod process;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use leafscope_core::{CalibrationConfig, VegetationPipeline};

/// Build a pipeline from a TOML calibration file, or the built-in defaults.
pub fn load_pipeline(config_path: Option<&Path>) -> Result<VegetationPipeline> {
    let config = match config_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<CalibrationConfig>(&contents).context("Invalid calibration config")?
        }
        None => CalibrationConfig::default(),
    };
    VegetationPipeline::new(config).context("Calibration rejected")
}

/// File stem used to name the outputs derived from `input`.
pub fn output_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string())
}

/// Output stems for a batch, one per input. Inputs sharing a file stem keep
/// the plain stem for the first occurrence and take `-2`, `-3`, ... after it.
pub fn unique_output_stems(files: &[PathBuf]) -> Vec<String> {
    let mut taken: HashSet<String> = files.iter().map(|f| output_stem(f)).collect();
    let mut used = HashSet::new();
    files
        .iter()
        .map(|file| {
            let stem = output_stem(file);
            if used.insert(stem.clone()) {
                return stem;
            }
            let mut n = 2;
            loop {
                let candidate = format!("{stem}-{n}");
                if taken.insert(candidate.clone()) {
                    return candidate;
                }
                n += 1;
            }
        })
        .collect()
}
