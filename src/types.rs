//! Core data types shared across pipeline stages.

use crate::catalog::{Platform, SizeSpec};
use crate::imaging::calculations::payload_size_kb;
use serde::Serialize;

/// Quality tier of a produced icon.
///
/// Generation produces `High` variants; optimization upgrades each one to
/// `Premium` on success and demotes it to `Standard` when its payload cannot
/// even be re-decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Premium,
    High,
    Standard,
}

impl QualityTier {
    pub fn label(self) -> &'static str {
        match self {
            QualityTier::Premium => "premium",
            QualityTier::High => "high",
            QualityTier::Standard => "standard",
        }
    }
}

/// One produced icon: its catalog identity, payload, and quality bookkeeping.
#[derive(Debug, Clone)]
pub struct IconVariant {
    pub platform: Platform,
    /// Variant name within the platform (e.g. `xhdpi`).
    pub size_name: &'static str,
    /// Square pixel size.
    pub size: u32,
    /// Destination folder inside the platform subtree.
    pub folder: &'static str,
    /// Encoded PNG payload.
    pub payload: Vec<u8>,
    /// Payload estimate in KB before optimization.
    pub original_kb: u32,
    /// Payload estimate in KB after optimization (equal to `original_kb`
    /// until the optimizer runs, or when it falls back).
    pub optimized_kb: u32,
    /// Percentage saved by optimization; `None` until the optimizer ran.
    pub savings: Option<i32>,
    pub tier: QualityTier,
    /// Whether an optimization pass completed for this variant (including
    /// the resample-only fallback).
    pub optimized: bool,
    /// Human-readable description of the optimization applied.
    pub algorithm: Option<String>,
    /// Error recorded while processing this variant, if any.
    pub error: Option<String>,
}

impl IconVariant {
    /// A freshly generated, not-yet-optimized variant.
    pub fn generated(platform: Platform, spec: &SizeSpec, payload: Vec<u8>) -> Self {
        let kb = payload_size_kb(payload.len());
        Self {
            platform,
            size_name: spec.name,
            size: spec.size,
            folder: spec.folder,
            payload,
            original_kb: kb,
            optimized_kb: kb,
            savings: None,
            tier: QualityTier::High,
            optimized: false,
            algorithm: None,
            error: None,
        }
    }
}
