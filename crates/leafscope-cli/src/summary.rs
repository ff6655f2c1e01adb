use std::path::{Path, PathBuf};

use console::Style;
use leafscope_core::{AnalysisResult, AnalysisStatus, CalibrationConfig};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    good: Style,
    fair: Style,
    poor: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green().bold(),
            fair: Style::new().yellow().bold(),
            poor: Style::new().red().bold(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    fn score(&self, score: f64) -> &Style {
        if score >= 75.0 {
            &self.good
        } else if score >= 40.0 {
            &self.fair
        } else {
            &self.poor
        }
    }
}

pub fn print_analysis_summary(file: &Path, analysis: &AnalysisResult) {
    let s = Styles::new();

    println!();
    println!("  {}", s.path.apply_to(file.display()));

    if analysis.status == AnalysisStatus::NoDetection {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Status"),
            s.disabled.apply_to(analysis.status)
        );
        println!("    {}", s.label.apply_to(&analysis.analysis));
        return;
    }

    println!(
        "    {:<12}{}",
        s.label.apply_to("Score"),
        s.score(analysis.health_score)
            .apply_to(format!("{:.1}/100", analysis.health_score))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Coverage"),
        s.value.apply_to(format!("{:.1}%", analysis.coverage_percentage))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Area"),
        s.value.apply_to(format!("{} px", analysis.vegetation_area))
    );
    for (tier, pct) in analysis.tier_percentages.iter().rev() {
        println!(
            "    {:<12}{}",
            s.label.apply_to(tier),
            s.value.apply_to(format!("{pct:.1}%"))
        );
    }
}

pub fn print_batch_table(results: &[(PathBuf, AnalysisResult)]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Summary"));
    println!("  {:<32}  {:>8}  {:>9}", "File", "Score", "Coverage");
    println!("  {}", "-".repeat(53));
    for (file, analysis) in results {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "  {:<32}  {:>8.1}  {:>8.1}%",
            name, analysis.health_score, analysis.coverage_percentage
        );
    }

    let detected: Vec<f64> = results
        .iter()
        .filter(|(_, a)| a.is_detection())
        .map(|(_, a)| a.health_score)
        .collect();
    if !detected.is_empty() {
        let mean = detected.iter().sum::<f64>() / detected.len() as f64;
        println!("\n  Mean score: {:.1}", mean);
    }
}

pub fn print_calibration_summary(config: &CalibrationConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Leafscope Calibration"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(21)));
    println!();

    println!("  {}", s.header.apply_to("Tiers"));
    for profile in &config.tiers {
        println!(
            "    {:<8}{}  {}  {}",
            s.label.apply_to(profile.tier),
            s.value.apply_to(format!("w={}", profile.tier.weight())),
            s.value.apply_to(format!("target {:.0}%", profile.target * 100.0)),
            s.label.apply_to(format!(
                "BGR {:?}..={:?}",
                profile.range.lower, profile.range.upper
            )),
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Overlay"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(format!("BGR {:?}", config.overlay.color))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Width"),
        s.value.apply_to(format!("{} px", config.overlay.thickness))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.header.apply_to("Flat input"),
        s.value.apply_to(config.on_degenerate)
    );
    println!(
        "  {:<14}{}",
        s.header.apply_to("Palette"),
        s.value.apply_to(format!("{} entries", config.palette.entries().len()))
    );
    println!();
}
