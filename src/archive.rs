//! Archive packaging: filenames, entry layout, and zip serialization.
//!
//! The packager runs exactly once over the finalized variant set. Layout:
//!
//! ```text
//! icons/{platform}/{folder}/{filename}        one per variant
//! README.md                                   always present
//! icons/ios/AppIcon.appiconset/Contents.json  iff ≥1 iOS variant
//! icons/browser/manifest.json                 iff ≥1 browser variant
//! ```

use crate::catalog::Platform;
use crate::config::ExportConfig;
use crate::manifest;
use crate::report;
use crate::types::IconVariant;
use std::io::{Cursor, Write};
use thiserror::Error;
use time::OffsetDateTime;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Plausibility floor: even an empty icon set with only a README deflates to
/// more than this. Anything smaller is a truncated or corrupt write.
const MIN_ARCHIVE_BYTES: usize = 100;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip write error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("degenerate archive: {0} bytes is below the {MIN_ARCHIVE_BYTES} byte floor")]
    DegenerateArchive(usize),
}

/// Filename for a variant, per the fixed per-platform naming policy.
///
/// Android launchers are always `ic_launcher.png` (each size lives in its own
/// density folder); browser files keep their conventional web names; every
/// other platform uses the `icon-{s}x{s}.png` default.
pub fn icon_file_name(variant: &IconVariant) -> String {
    match variant.platform {
        Platform::Android => "ic_launcher.png".to_string(),
        Platform::Browser => {
            if variant.size_name.contains("favicon") {
                format!("favicon-{0}x{0}.png", variant.size)
            } else if variant.size_name.contains("apple-touch") {
                format!("apple-touch-icon-{0}x{0}.png", variant.size)
            } else {
                format!("android-chrome-{0}x{0}.png", variant.size)
            }
        }
        _ => format!("icon-{0}x{0}.png", variant.size),
    }
}

/// Full archive path for a variant.
pub fn entry_path(variant: &IconVariant) -> String {
    format!(
        "icons/{}/{}/{}",
        variant.platform.key(),
        variant.folder,
        icon_file_name(variant)
    )
}

/// Today's date in ISO format (UTC).
pub fn today_iso() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

/// Suggested download name for the archive.
pub fn archive_file_name() -> String {
    format!("icone-multi-piattaforma-{}.zip", today_iso())
}

/// Serialize the finalized variant set into a compressed archive.
///
/// Variants are written in their given order, followed by the README and any
/// platform manifests. Deflate at maximum level throughout.
pub fn package(variants: &[IconVariant], config: &ExportConfig) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for variant in variants {
        writer.start_file(entry_path(variant), options)?;
        writer.write_all(&variant.payload)?;
    }

    writer.start_file("README.md", options)?;
    writer.write_all(report::render_readme(variants, &today_iso()).as_bytes())?;

    if let Some(contents) = manifest::ios_contents(variants, &config.contents) {
        writer.start_file("icons/ios/AppIcon.appiconset/Contents.json", options)?;
        writer.write_all(&serde_json::to_vec_pretty(&contents)?)?;
    }
    if let Some(web) = manifest::web_manifest(variants, &config.manifest) {
        writer.start_file("icons/browser/manifest.json", options)?;
        writer.write_all(&serde_json::to_vec_pretty(&web)?)?;
    }

    let bytes = writer.finish()?.into_inner();
    ensure_plausible(bytes.len())?;
    Ok(bytes)
}

/// Reject implausibly small archives rather than handing back a truncated
/// result.
fn ensure_plausible(len: usize) -> Result<(), ArchiveError> {
    if len < MIN_ARCHIVE_BYTES {
        return Err(ArchiveError::DegenerateArchive(len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeSpec;
    use crate::imaging::backend::tests::MockBackend;
    use crate::pipeline;
    use std::io::Read;
    use zip::ZipArchive;

    fn variant(platform: Platform, name: &'static str, size: u32, folder: &'static str) -> IconVariant {
        IconVariant::generated(platform, &SizeSpec { name, size, folder }, vec![7u8; 64])
    }

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn android_files_are_ic_launcher() {
        let v = variant(Platform::Android, "xhdpi", 96, "mipmap-xhdpi");
        assert_eq!(icon_file_name(&v), "ic_launcher.png");
        assert_eq!(entry_path(&v), "icons/android/mipmap-xhdpi/ic_launcher.png");
    }

    #[test]
    fn browser_names_follow_variant_kind() {
        let favicon = variant(Platform::Browser, "favicon-32", 32, "favicon");
        let touch = variant(Platform::Browser, "apple-touch", 180, "favicon");
        let chrome = variant(Platform::Browser, "android-chrome", 192, "favicon");
        assert_eq!(icon_file_name(&favicon), "favicon-32x32.png");
        assert_eq!(icon_file_name(&touch), "apple-touch-icon-180x180.png");
        assert_eq!(icon_file_name(&chrome), "android-chrome-192x192.png");
    }

    #[test]
    fn other_platforms_use_default_pattern() {
        let linux = variant(Platform::Linux, "hicolor-48", 48, "hicolor/48x48/apps");
        assert_eq!(icon_file_name(&linux), "icon-48x48.png");
        assert_eq!(
            entry_path(&linux),
            "icons/linux/hicolor/48x48/apps/icon-48x48.png"
        );
        let macos = variant(Platform::Macos, "dock", 32, "AppIcon.iconset");
        assert_eq!(icon_file_name(&macos), "icon-32x32.png");
    }

    #[test]
    fn archive_name_embeds_iso_date() {
        let name = archive_file_name();
        assert!(name.starts_with("icone-multi-piattaforma-"));
        assert!(name.ends_with(".zip"));
        // icone-multi-piattaforma-YYYY-MM-DD.zip
        assert_eq!(name.len(), "icone-multi-piattaforma-".len() + 10 + 4);
    }

    #[test]
    fn ios_and_browser_selection_packs_thirteen_entries() {
        let backend = MockBackend::new();
        let variants = pipeline::generate(
            &backend,
            b"src",
            &[Platform::Ios, Platform::Browser],
            None,
        );
        assert_eq!(variants.len(), 10);

        let bytes = package(&variants, &ExportConfig::default()).unwrap();
        let names = entry_names(&bytes);
        assert_eq!(names.len(), 13);
        assert!(names.contains(&"README.md".to_string()));
        assert!(names.contains(&"icons/ios/AppIcon.appiconset/Contents.json".to_string()));
        assert!(names.contains(&"icons/browser/manifest.json".to_string()));
    }

    #[test]
    fn manifests_absent_for_unselected_platforms() {
        let backend = MockBackend::new();
        let variants = pipeline::generate(&backend, b"src", &[Platform::Android], None);
        let bytes = package(&variants, &ExportConfig::default()).unwrap();
        let names = entry_names(&bytes);
        assert_eq!(names.len(), 7); // 6 icons + README
        assert!(!names.iter().any(|n| n.ends_with("Contents.json")));
        assert!(!names.iter().any(|n| n.ends_with("manifest.json")));
    }

    #[test]
    fn payloads_round_trip() {
        let v = variant(Platform::Windows, "taskbar", 24, "taskbar");
        let bytes = package(&[v.clone()], &ExportConfig::default()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name("icons/windows/taskbar/icon-24x24.png").unwrap();
        let mut payload = Vec::new();
        entry.read_to_end(&mut payload).unwrap();
        assert_eq!(payload, v.payload);
    }

    #[test]
    fn plausibility_floor_rejects_tiny_archives() {
        assert!(ensure_plausible(99).is_err());
        assert!(ensure_plausible(100).is_ok());
        let err = ensure_plausible(0).unwrap_err();
        assert!(matches!(err, ArchiveError::DegenerateArchive(0)));
    }

    #[test]
    fn empty_selection_still_produces_readme() {
        let bytes = package(&[], &ExportConfig::default()).unwrap();
        let names = entry_names(&bytes);
        assert_eq!(names, vec!["README.md".to_string()]);
    }
}
