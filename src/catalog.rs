//! The platform catalog: which icons exist, at which sizes, in which folders.
//!
//! This is pure enumerated configuration. The tables below define the *entire*
//! universe of obtainable icons per platform — nothing is derived or mutated
//! at runtime, and every pipeline stage iterates them in the order given here.
//!
//! Folder names follow each platform's packaging convention (`mipmap-*` for
//! Android density buckets, `AppIcon.appiconset` for Xcode, `hicolor` theme
//! directories for Linux, and so on), so the archive can be dropped into a
//! project tree as-is.

use serde::Serialize;

/// One icon size a platform requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeSpec {
    /// Variant name within the platform (e.g. `xhdpi`, `app-store`).
    pub name: &'static str,
    /// Square pixel size of the output icon.
    pub size: u32,
    /// Destination folder inside the platform's archive subtree.
    pub folder: &'static str,
}

/// A platform and its ordered size list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformSpec {
    /// Human-readable platform name.
    pub name: &'static str,
    pub sizes: &'static [SizeSpec],
}

const fn size(name: &'static str, size: u32, folder: &'static str) -> SizeSpec {
    SizeSpec { name, size, folder }
}

static ANDROID: PlatformSpec = PlatformSpec {
    name: "Android",
    sizes: &[
        size("mdpi", 48, "mipmap-mdpi"),
        size("hdpi", 72, "mipmap-hdpi"),
        size("xhdpi", 96, "mipmap-xhdpi"),
        size("xxhdpi", 144, "mipmap-xxhdpi"),
        size("xxxhdpi", 192, "mipmap-xxxhdpi"),
        size("play-store", 512, "play-store"),
    ],
};

static IOS: PlatformSpec = PlatformSpec {
    name: "iOS",
    sizes: &[
        size("notification", 20, "AppIcon.appiconset"),
        size("settings", 29, "AppIcon.appiconset"),
        size("spotlight", 40, "AppIcon.appiconset"),
        size("app-iphone", 60, "AppIcon.appiconset"),
        size("app-ipad", 76, "AppIcon.appiconset"),
        size("app-store", 1024, "AppIcon.appiconset"),
    ],
};

static WINDOWS: PlatformSpec = PlatformSpec {
    name: "Windows",
    sizes: &[
        size("small-tile", 71, "tiles"),
        size("medium-tile", 150, "tiles"),
        size("large-tile", 310, "tiles"),
        size("taskbar", 24, "taskbar"),
    ],
};

static BROWSER: PlatformSpec = PlatformSpec {
    name: "Browser",
    sizes: &[
        size("favicon-16", 16, "favicon"),
        size("favicon-32", 32, "favicon"),
        size("apple-touch", 180, "favicon"),
        size("android-chrome", 192, "favicon"),
    ],
};

static MACOS: PlatformSpec = PlatformSpec {
    name: "macOS",
    sizes: &[
        size("menubar", 16, "AppIcon.iconset"),
        size("menubar@2x", 32, "AppIcon.iconset"),
        size("dock", 32, "AppIcon.iconset"),
        size("dock@2x", 64, "AppIcon.iconset"),
        size("finder", 128, "AppIcon.iconset"),
        size("finder@2x", 256, "AppIcon.iconset"),
        size("app", 512, "AppIcon.iconset"),
        size("app@2x", 1024, "AppIcon.iconset"),
    ],
};

static LINUX: PlatformSpec = PlatformSpec {
    name: "Linux",
    sizes: &[
        size("hicolor-16", 16, "hicolor/16x16/apps"),
        size("hicolor-22", 22, "hicolor/22x22/apps"),
        size("hicolor-24", 24, "hicolor/24x24/apps"),
        size("hicolor-32", 32, "hicolor/32x32/apps"),
        size("hicolor-48", 48, "hicolor/48x48/apps"),
        size("hicolor-64", 64, "hicolor/64x64/apps"),
        size("hicolor-96", 96, "hicolor/96x96/apps"),
        size("hicolor-128", 128, "hicolor/128x128/apps"),
        size("hicolor-192", 192, "hicolor/192x192/apps"),
        size("hicolor-256", 256, "hicolor/256x256/apps"),
    ],
};

/// A supported target platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Windows,
    Browser,
    Macos,
    Linux,
}

impl Platform {
    /// All platforms, in catalog order.
    pub const ALL: [Platform; 6] = [
        Platform::Android,
        Platform::Ios,
        Platform::Windows,
        Platform::Browser,
        Platform::Macos,
        Platform::Linux,
    ];

    /// Lowercase key used for archive paths and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Windows => "windows",
            Platform::Browser => "browser",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(self) -> &'static str {
        self.spec().name
    }

    /// The platform's size table.
    pub fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::Android => &ANDROID,
            Platform::Ios => &IOS,
            Platform::Windows => &WINDOWS,
            Platform::Browser => &BROWSER,
            Platform::Macos => &MACOS,
            Platform::Linux => &LINUX,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Total number of icons a platform selection will produce.
pub fn total_sizes(platforms: &[Platform]) -> usize {
    platforms.iter().map(|p| p.spec().sizes.len()).sum()
}
