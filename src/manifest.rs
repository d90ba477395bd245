//! Generated manifest documents: iOS `Contents.json` and the browser web
//! manifest.
//!
//! Both are synthesized from the final variant set, only when the matching
//! platform contributed at least one variant, and serialized into the archive
//! by the packager.

use crate::catalog::Platform;
use crate::config::{ContentsConfig, ManifestConfig};
use crate::types::IconVariant;
use serde::Serialize;

/// Xcode asset-catalog manifest for the `AppIcon.appiconset` folder.
#[derive(Debug, Clone, Serialize)]
pub struct ContentsJson {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentsImage {
    /// `"{s}x{s}"`.
    pub size: String,
    pub idiom: &'static str,
    pub filename: String,
    pub scale: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u32,
}

/// Device idiom for an icon size: small sizes are universal, mid sizes
/// iPhone, large sizes iPad.
fn idiom(size: u32) -> &'static str {
    if size <= 40 {
        "universal"
    } else if size <= 76 {
        "iphone"
    } else {
        "ipad"
    }
}

/// Build `Contents.json`; `None` when no iOS variant is present.
pub fn ios_contents(variants: &[IconVariant], config: &ContentsConfig) -> Option<ContentsJson> {
    let images: Vec<ContentsImage> = variants
        .iter()
        .filter(|v| v.platform == Platform::Ios)
        .map(|v| ContentsImage {
            size: format!("{0}x{0}", v.size),
            idiom: idiom(v.size),
            filename: format!("icon-{0}x{0}.png", v.size),
            scale: "1x",
        })
        .collect();
    if images.is_empty() {
        return None;
    }
    Some(ContentsJson {
        images,
        info: ContentsInfo {
            author: config.author.clone(),
            version: 1,
        },
    })
}

/// Browser web app manifest.
#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    /// Path relative to the browser platform subtree.
    pub src: String,
    /// `"{s}x{s}"`.
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Build `manifest.json`; `None` when no browser variant is present.
pub fn web_manifest(variants: &[IconVariant], config: &ManifestConfig) -> Option<WebManifest> {
    let icons: Vec<ManifestIcon> = variants
        .iter()
        .filter(|v| v.platform == Platform::Browser)
        .map(|v| ManifestIcon {
            src: format!("favicon/favicon-{0}x{0}.png", v.size),
            sizes: format!("{0}x{0}", v.size),
            mime_type: "image/png",
        })
        .collect();
    if icons.is_empty() {
        return None;
    }
    Some(WebManifest {
        name: config.name.clone(),
        short_name: config.short_name.clone(),
        icons,
        theme_color: config.theme_color.clone(),
        background_color: config.background_color.clone(),
        display: config.display.clone(),
    })
}
