//! Export configuration module.
//!
//! Handles loading and validating an optional `iconforge.toml`. The pipeline
//! itself is not configurable (the platform catalog and processing parameters
//! are fixed); configuration only covers the constants written into the
//! generated manifest documents.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [manifest]
//! name = "App"                 # Web manifest application name
//! short_name = "App"           # Web manifest short name
//! theme_color = "#ffffff"      # Web manifest theme color
//! background_color = "#ffffff" # Web manifest background color
//! display = "standalone"       # Web manifest display mode
//!
//! [contents]
//! author = "xcode"             # Contents.json author field
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Export configuration loaded from `iconforge.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Web manifest constants (browser platform).
    pub manifest: ManifestConfig,
    /// Contents.json constants (iOS platform).
    pub contents: ContentsConfig,
}

/// Fields written verbatim into the browser `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "App".to_string(),
            short_name: "App".to_string(),
            theme_color: "#ffffff".to_string(),
            background_color: "#ffffff".to_string(),
            display: "standalone".to_string(),
        }
    }
}

/// Fields written into the iOS `Contents.json` info block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentsConfig {
    pub author: String,
}

impl Default for ContentsConfig {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
        }
    }
}

impl ExportConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest.name.is_empty() {
            return Err(ConfigError::Validation(
                "manifest.name must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("manifest.theme_color", &self.manifest.theme_color),
            ("manifest.background_color", &self.manifest.background_color),
        ] {
            if !value.starts_with('#') {
                return Err(ConfigError::Validation(format!(
                    "{field} must be a #-prefixed hex color, got {value:?}"
                )));
            }
        }
        const DISPLAY_MODES: [&str; 4] = ["fullscreen", "standalone", "minimal-ui", "browser"];
        if !DISPLAY_MODES.contains(&self.manifest.display.as_str()) {
            return Err(ConfigError::Validation(format!(
                "manifest.display must be one of {DISPLAY_MODES:?}, got {:?}",
                self.manifest.display
            )));
        }
        Ok(())
    }
}

/// Load and validate a config file; `None` means stock defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExportConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ExportConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// A stock `iconforge.toml` with every option documented.
pub fn stock_config_toml() -> &'static str {
    r##"# iconforge configuration
# All options are optional - defaults shown below.

[manifest]
# Web manifest application name
name = "App"
# Web manifest short name
short_name = "App"
# Web manifest theme color
theme_color = "#ffffff"
# Web manifest background color
background_color = "#ffffff"
# Web manifest display mode: fullscreen, standalone, minimal-ui or browser
display = "standalone"

[contents]
# Contents.json author field
author = "xcode"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_validate() {
        assert!(ExportConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.manifest.display, "standalone");
        assert_eq!(config.contents.author, "xcode");
    }

    #[test]
    fn partial_config_overrides_only_named_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[manifest]\nname = \"Gallery\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.manifest.name, "Gallery");
        assert_eq!(config.manifest.short_name, "App");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[manifest]\ncolour = \"#fff\"").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn bad_color_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[manifest]\ntheme_color = \"ffffff\"").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn bad_display_mode_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[manifest]\ndisplay = \"popup\"").unwrap();
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let parsed: ExportConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed.manifest.name, ExportConfig::default().manifest.name);
        assert_eq!(
            parsed.contents.author,
            ExportConfig::default().contents.author
        );
        assert!(parsed.validate().is_ok());
    }
}
