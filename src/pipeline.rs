//! Pipeline driving loops: generation and optimization.
//!
//! These loops own sequencing, progress reporting, and failure isolation; all
//! pixel work is delegated to an [`ImageBackend`]. Both stages are strictly
//! sequential: the normalized base is produced once and shared read-only by
//! every resize, the variant list is append-only during generation and
//! replaced in place during optimization, and a cooperative
//! `std::thread::yield_now()` runs between items so a host thread stays
//! responsive. The yields carry no ordering or correctness obligation.
//!
//! Progress is reported as events over an `mpsc` channel, one
//! [`PipelineEvent::StepCompleted`] after every attempt, with a monotonic
//! `completed/total` fraction.

use crate::catalog::{Platform, total_sizes};
use crate::imaging::calculations::{payload_size_kb, savings_percent};
use crate::imaging::{BackendError, ImageBackend, QuantizeParams, ResizeParams};
use crate::types::{IconVariant, QualityTier};
use std::sync::mpsc::Sender;

/// Algorithm label recorded on successfully optimized variants.
pub const QUANTIZE_LABEL: &str = "lanczos + wu quantize (256 colors)";
/// Algorithm label recorded when quantization fails and the resampled payload
/// is kept as-is.
pub const FALLBACK_LABEL: &str = "resample-only (quantization unavailable)";

/// A pipeline stage, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generate,
    Optimize,
}

/// Outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    /// Optimization fell back to the resampled payload.
    Fallback(String),
    /// The step failed; the variant was skipped (generate) or demoted
    /// (optimize).
    Failed(String),
}

/// Progress events emitted by the pipeline loops.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    StageStarted {
        stage: Stage,
        total: usize,
    },
    /// Emitted after every attempt, success or failure.
    StepCompleted {
        stage: Stage,
        completed: usize,
        total: usize,
        platform: Platform,
        size_name: &'static str,
        size: u32,
        status: StepStatus,
    },
    /// The source image could not be decoded; generation produced nothing.
    SourceRejected {
        reason: String,
    },
}

/// Progress fraction in [0, 1]. An empty stage counts as complete.
pub fn progress_fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        completed as f64 / total as f64
    }
}

fn emit(events: Option<&Sender<PipelineEvent>>, event: PipelineEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is listening.
        let _ = tx.send(event);
    }
}

/// Generate one variant per catalog size of every selected platform.
///
/// The source is normalized once; every resize reads the same base. A source
/// that cannot be decoded resolves to an empty variant set rather than an
/// error, so callers can treat "zero icons" as the failure signal. A per-size
/// resize failure skips that single size and the run continues.
///
/// Output order is platform order in `platforms` × size order in the catalog.
pub fn generate(
    backend: &dyn ImageBackend,
    source: &[u8],
    platforms: &[Platform],
    events: Option<&Sender<PipelineEvent>>,
) -> Vec<IconVariant> {
    let total = total_sizes(platforms);
    emit(
        events,
        PipelineEvent::StageStarted {
            stage: Stage::Generate,
            total,
        },
    );

    let base = match backend.normalize(source) {
        Ok(base) => base,
        Err(err) => {
            emit(
                events,
                PipelineEvent::SourceRejected {
                    reason: err.to_string(),
                },
            );
            return Vec::new();
        }
    };

    let mut variants = Vec::with_capacity(total);
    let mut completed = 0;
    for &platform in platforms {
        for spec in platform.spec().sizes {
            let status = match backend.resize(&base, &ResizeParams::for_size(spec.size)) {
                Ok(payload) => {
                    variants.push(IconVariant::generated(platform, spec, payload));
                    StepStatus::Ok
                }
                Err(err) => StepStatus::Failed(err.to_string()),
            };
            completed += 1;
            emit(
                events,
                PipelineEvent::StepCompleted {
                    stage: Stage::Generate,
                    completed,
                    total,
                    platform,
                    size_name: spec.name,
                    size: spec.size,
                    status,
                },
            );
            std::thread::yield_now();
        }
    }
    variants
}

/// Quantize every variant's payload, in generation order.
///
/// Per-item isolation is mandatory: one variant's failure never aborts the
/// rest. On success the variant is upgraded to premium with size statistics;
/// when quantization fails the resampled payload is kept and the variant
/// stays high tier with the fallback label; a payload that cannot even be
/// re-decoded demotes the variant to standard. The identity tuple (platform,
/// variant name, size, folder) is never touched.
pub fn optimize(
    backend: &dyn ImageBackend,
    variants: Vec<IconVariant>,
    events: Option<&Sender<PipelineEvent>>,
) -> Vec<IconVariant> {
    let total = variants.len();
    emit(
        events,
        PipelineEvent::StageStarted {
            stage: Stage::Optimize,
            total,
        },
    );

    let mut out = Vec::with_capacity(total);
    for (idx, mut variant) in variants.into_iter().enumerate() {
        let status = match backend.quantize(&variant.payload, &QuantizeParams::default()) {
            Ok(optimized) => {
                variant.original_kb = payload_size_kb(variant.payload.len());
                variant.optimized_kb = payload_size_kb(optimized.len());
                variant.savings = Some(savings_percent(variant.original_kb, variant.optimized_kb));
                variant.payload = optimized;
                variant.tier = QualityTier::Premium;
                variant.optimized = true;
                variant.algorithm = Some(QUANTIZE_LABEL.to_string());
                StepStatus::Ok
            }
            Err(BackendError::DecodeFailed(reason)) => {
                variant.tier = QualityTier::Standard;
                variant.optimized = false;
                variant.error = Some(reason.clone());
                StepStatus::Failed(reason)
            }
            Err(err) => {
                let reason = err.to_string();
                variant.tier = QualityTier::High;
                variant.optimized = true;
                variant.algorithm = Some(FALLBACK_LABEL.to_string());
                variant.error = Some(reason.clone());
                StepStatus::Fallback(reason)
            }
        };
        emit(
            events,
            PipelineEvent::StepCompleted {
                stage: Stage::Optimize,
                completed: idx + 1,
                total,
                platform: variant.platform,
                size_name: variant.size_name,
                size: variant.size,
                status,
            },
        );
        out.push(variant);
        std::thread::yield_now();
    }
    out
}
