//! CLI output formatting.
//!
//! Pure `format_*` functions that build the lines, and thin `print_*`
//! wrappers that write them. Keeping the formatting pure makes it testable
//! without capturing stdout.

use crate::catalog::Platform;
use crate::pipeline::{PipelineEvent, Stage, StepStatus, progress_fraction};
use crate::report;
use crate::types::{IconVariant, QualityTier};

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Generate => "Generating icons",
        Stage::Optimize => "Optimizing icons",
    }
}

/// Format a pipeline progress event as zero or more output lines.
pub fn format_pipeline_event(event: &PipelineEvent) -> Vec<String> {
    match event {
        PipelineEvent::StageStarted { stage, total } => {
            vec![format!("==> {} ({} sizes)", stage_label(*stage), total)]
        }
        PipelineEvent::StepCompleted {
            completed,
            total,
            platform,
            size_name,
            size,
            status,
            ..
        } => {
            let percent = (progress_fraction(*completed, *total) * 100.0).round() as u32;
            let prefix = format!("  [{percent:>3}%] {platform}/{size_name} {size}px");
            match status {
                StepStatus::Ok => vec![prefix],
                StepStatus::Fallback(reason) => {
                    vec![format!("{prefix} - kept resampled payload ({reason})")]
                }
                StepStatus::Failed(reason) => vec![format!("{prefix} - failed: {reason}")],
            }
        }
        PipelineEvent::SourceRejected { reason } => {
            vec![format!("Source image rejected: {reason}")]
        }
    }
}

/// Per-run summary printed after packaging.
pub fn format_summary(variants: &[IconVariant]) -> Vec<String> {
    let premium = variants
        .iter()
        .filter(|v| v.tier == QualityTier::Premium)
        .count();
    let standard = variants
        .iter()
        .filter(|v| v.tier == QualityTier::Standard)
        .count();

    let mut lines = vec![
        format!("Icons: {}", variants.len()),
        format!("Fully optimized: {premium}"),
        format!("Average savings: {}%", report::average_savings(variants)),
    ];
    if standard > 0 {
        lines.push(format!("Kept without optimization: {standard}"));
    }
    lines
}

pub fn print_summary(variants: &[IconVariant]) {
    for line in format_summary(variants) {
        println!("{line}");
    }
}

/// The full platform catalog, one line per size.
pub fn format_platform_list() -> Vec<String> {
    let mut lines = Vec::new();
    for platform in Platform::ALL {
        let spec = platform.spec();
        lines.push(format!(
            "{} ({}, {} sizes)",
            spec.name,
            platform.key(),
            spec.sizes.len()
        ));
        for size in spec.sizes {
            lines.push(format!("  {:<14} {:>4}px  {}", size.name, size.size, size.folder));
        }
    }
    lines
}

pub fn print_platform_list() {
    for line in format_platform_list() {
        println!("{line}");
    }
}
