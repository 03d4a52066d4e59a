//! User configuration file handling
//!
//! Manages settings from ~/.config/fontgen/settings.json

use crate::core::errors::FontgenContext;
use crate::data::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/fontgen/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Directory exports are written to
    pub output_dir: Option<PathBuf>,
    /// Preset ids exported when none are given on the command line
    pub default_fonts: Option<Vec<String>>,
    /// Export format used when `--format` is not given
    pub format: Option<ExportFormat>,
}

impl ConfigFile {
    /// Get the path to the fontgen config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("fontgen")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from the user config file
    ///
    /// A missing file gives the defaults silently; an unreadable or invalid
    /// one gives the defaults with a warning.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                debug!("Loaded user settings from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring settings file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        serde_json::from_str(&contents).with_file_context("parse", path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context("create", parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_file_context("write", path)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("build/fonts")),
            default_fonts: Some(vec!["vkr".to_string(), "klm".to_string()]),
            format: Some(ExportFormat::Svg),
        };
        config.save_to(&path).unwrap();
        assert_eq!(ConfigFile::load_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_keys_default_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "format": "json" }"#).unwrap();
        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.format, Some(ExportFormat::Json));
        assert_eq!(config.output_dir, None);
        assert_eq!(config.default_fonts, None);
    }

    #[test]
    fn invalid_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let error = ConfigFile::load_from(&path).unwrap_err();
        assert!(error.to_string().starts_with("failed to parse"));
    }
}
