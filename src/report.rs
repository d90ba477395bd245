//! The human-readable README bundled into every archive.
//!
//! Pure string building over the finalized variant set; the packager writes
//! the result as `README.md`. Aggregates must never propagate NaN: a variant
//! without a savings figure contributes zero to averages.

use crate::archive;
use crate::catalog::Platform;
use crate::types::{IconVariant, QualityTier};

/// Mean savings percentage across all variants, rounded.
///
/// Variants without a recorded figure count as 0; an empty set averages to 0.
pub fn average_savings(variants: &[IconVariant]) -> i32 {
    if variants.is_empty() {
        return 0;
    }
    let sum: i64 = variants
        .iter()
        .map(|v| i64::from(v.savings.unwrap_or(0)))
        .sum();
    (sum as f64 / variants.len() as f64).round() as i32
}

/// Render the archive README.
pub fn render_readme(variants: &[IconVariant], date: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("# App Icons".to_string());
    lines.push(String::new());
    lines.push(format!("Generated on {date}."));
    lines.push(String::new());

    lines.push("## Contents".to_string());
    lines.push(String::new());
    for platform in present_platforms(variants) {
        lines.push(format!("### {}", platform.display_name()));
        lines.push(String::new());
        for v in variants.iter().filter(|v| v.platform == platform) {
            lines.push(format!(
                "- `{path}` ({size}x{size}px)",
                path = archive::entry_path(v),
                size = v.size
            ));
        }
        lines.push(String::new());
        lines.extend(usage_lines(platform).iter().map(|s| s.to_string()));
        lines.push(String::new());
    }

    lines.push("## Quality".to_string());
    lines.push(String::new());
    lines.extend(quality_lines(variants));
    lines.push(String::new());

    lines.push("## Statistics".to_string());
    lines.push(String::new());
    lines.push(format!("- Icons generated: {}", variants.len()));
    lines.push(format!(
        "- Fully optimized: {}",
        variants
            .iter()
            .filter(|v| v.tier == QualityTier::Premium)
            .count()
    ));
    lines.push(format!("- Average size savings: {}%", average_savings(variants)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Platforms with at least one variant, in catalog order.
fn present_platforms(variants: &[IconVariant]) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|p| variants.iter().any(|v| v.platform == *p))
        .collect()
}

fn usage_lines(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Android => &[
            "Copy the `mipmap-*` folders into your app's `app/src/main/res/` directory.",
            "Upload the 512x512 `play-store` icon to the Play Console listing.",
        ],
        Platform::Ios => &[
            "Drag the `AppIcon.appiconset` folder into your Xcode asset catalog.",
            "`Contents.json` is included, so Xcode picks up every size automatically.",
        ],
        Platform::Windows => &[
            "Reference the `tiles` images from your application manifest.",
            "Use the `taskbar` icon for the notification area.",
        ],
        Platform::Browser => &[
            "Copy the `favicon` files to your web root and link `manifest.json`",
            "from your HTML head (`<link rel=\"manifest\" href=\"/manifest.json\">`).",
        ],
        Platform::Macos => &[
            "Convert the iconset with `iconutil -c icns AppIcon.iconset`",
            "and add the resulting `.icns` file to your app bundle.",
        ],
        Platform::Linux => &[
            "Install the `hicolor` tree under `/usr/share/icons/` (or `~/.local/share/icons/`)",
            "and refresh caches with `gtk-update-icon-cache`.",
        ],
    }
}

fn quality_lines(variants: &[IconVariant]) -> Vec<String> {
    let mut lines = Vec::new();
    let optimized = variants.iter().any(|v| v.optimized);
    if optimized {
        lines.push(
            "Icons were palette-quantized (at most 256 colors, alpha preserved) and \
             losslessly re-encoded."
                .to_string(),
        );
        lines.push(format!(
            "Average size savings across all icons: {}%.",
            average_savings(variants)
        ));
    } else {
        lines.push(
            "Icons are losslessly encoded at high quality; no additional optimization \
             was applied."
                .to_string(),
        );
    }
    if variants.iter().any(|v| v.tier == QualityTier::Standard) {
        lines.push(
            "Some icons could not be re-processed and kept their original resampled \
             encoding."
                .to_string(),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeSpec;

    fn variant(platform: Platform, size: u32) -> IconVariant {
        IconVariant::generated(
            platform,
            &SizeSpec {
                name: "test",
                size,
                folder: "folder",
            },
            vec![0u8; 64],
        )
    }

    #[test]
    fn average_is_zero_for_empty_set() {
        assert_eq!(average_savings(&[]), 0);
    }

    #[test]
    fn missing_savings_contribute_zero() {
        let mut a = variant(Platform::Android, 48);
        a.savings = Some(40);
        let b = variant(Platform::Android, 72); // savings: None
        assert_eq!(average_savings(&[a, b]), 20);
    }

    #[test]
    fn average_keeps_negative_measurements() {
        let mut a = variant(Platform::Android, 48);
        a.savings = Some(-30);
        let mut b = variant(Platform::Android, 72);
        b.savings = Some(10);
        assert_eq!(average_savings(&[a, b]), -10);
    }

    #[test]
    fn readme_lists_only_present_platforms() {
        let readme = render_readme(&[variant(Platform::Linux, 48)], "2026-08-29");
        assert!(readme.contains("### Linux"));
        assert!(!readme.contains("### Android"));
        assert!(readme.contains("Generated on 2026-08-29."));
    }

    #[test]
    fn readme_switches_quality_section_on_optimization() {
        let plain = render_readme(&[variant(Platform::Ios, 20)], "2026-08-29");
        assert!(plain.contains("no additional optimization"));

        let mut v = variant(Platform::Ios, 20);
        v.optimized = true;
        v.tier = QualityTier::Premium;
        v.savings = Some(35);
        let optimized = render_readme(&[v], "2026-08-29");
        assert!(optimized.contains("palette-quantized"));
        assert!(optimized.contains("35%"));
    }

    #[test]
    fn readme_notes_standard_tier_fallbacks() {
        let mut v = variant(Platform::Windows, 24);
        v.tier = QualityTier::Standard;
        let readme = render_readme(&[v], "2026-08-29");
        assert!(readme.contains("could not be re-processed"));
    }

    #[test]
    fn readme_ends_with_statistics() {
        let readme = render_readme(&[variant(Platform::Android, 48)], "2026-08-29");
        assert!(readme.contains("- Icons generated: 1"));
        assert!(readme.contains("- Fully optimized: 0"));
        assert!(readme.contains("- Average size savings: 0%"));
        assert!(readme.ends_with('\n'));
    }
}
