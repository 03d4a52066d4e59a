//! Command line interface for fontgen
//!
//! Handles parsing command line arguments and resolving them against the
//! user's settings file into a concrete export plan.

use crate::core::config_file::ConfigFile;
use crate::core::presets::{self, Preset};
use crate::data::ExportFormat;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Directory exports go to when neither the CLI nor the settings name one.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// fontgen CLI arguments
///
/// Examples:
///   fontgen --list                      # Show every preset id
///   fontgen --font vkr                  # Export Vekos Regular as UFO
///   fontgen -f vkb -f klm --format svg  # Two fonts as per-glyph SVG
///   fontgen --all --output build        # Every preset into ./build
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fontgen",
    version,
    about = "Generate constructed-script fonts from style parameters",
    long_about = "fontgen draws every glyph of the Vekos and Kaleg typeface families from a handful of style parameters and writes the result as UFO sources, per-glyph SVG files or a JSON dump."
)]
pub struct CliArgs {
    /// Preset ids of the fonts to export
    #[clap(
        long = "font",
        short = 'f',
        value_name = "ID",
        help = "Preset id of a font to export (repeatable)",
        long_help = "Preset id of a font to export, e.g. vkr for Vekos Regular or klmb for Kaleg Miter Beaked. Repeat the flag to export several fonts. Run with --list to see every id."
    )]
    pub fonts: Vec<String>,

    /// Export every preset
    #[clap(long = "all", short = 'a', conflicts_with = "fonts", help = "Export every preset")]
    pub all: bool,

    /// List the preset ids and exit
    #[clap(long = "list", short = 'l', help = "List preset ids and exit")]
    pub list: bool,

    /// Output format
    #[clap(
        long = "format",
        value_enum,
        help = "Output format",
        long_help = "Output format. Defaults to the format in settings.json, or ufo."
    )]
    pub format: Option<ExportFormat>,

    /// Output directory
    #[clap(
        long = "output",
        short = 'o',
        value_name = "DIR",
        help = "Output directory",
        long_help = "Directory the exports are written to. Defaults to output_dir in settings.json, or ./out."
    )]
    pub output: Option<PathBuf>,

    /// Also write logs to a daily file under the config directory
    #[clap(long = "log-file", help = "Also write logs to ~/.config/fontgen/logs")]
    pub log_file: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What an export run does after CLI and settings are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub presets: Vec<&'static Preset>,
    pub format: ExportFormat,
    pub output_dir: PathBuf,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Unknown preset ids are reported with the list of valid ones.
    pub fn validate(&self) -> Result<(), String> {
        let unknown: Vec<&str> = self
            .fonts
            .iter()
            .map(String::as_str)
            .filter(|id| presets::by_id(id).is_none())
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Unknown font id: {}\nAvailable ids: {}",
                unknown.join(", "),
                presets::ids().join(", ")
            ))
        }
    }

    /// Merge the arguments with the settings file
    ///
    /// Priority order:
    /// 1. CLI arguments
    /// 2. Config file settings (~/.config/fontgen/settings.json)
    /// 3. Built-in defaults (every preset, UFO, ./out)
    pub fn plan(&self, config: &ConfigFile) -> Result<ExportPlan, String> {
        self.validate()?;
        let mut presets: Vec<&'static Preset> = if self.all {
            presets::all().iter().collect()
        } else if !self.fonts.is_empty() {
            self.fonts.iter().filter_map(|id| presets::by_id(id)).collect()
        } else if let Some(ids) = &config.default_fonts {
            debug!("Using fonts from config file: {:?}", ids);
            ids.iter()
                .map(|id| presets::by_id(id).ok_or_else(|| format!("Unknown font id in settings.json: {id}")))
                .collect::<Result<_, String>>()?
        } else {
            presets::all().iter().collect()
        };
        // Two runs on one preset would write the same directory.
        let mut seen = HashSet::new();
        presets.retain(|preset| seen.insert(preset.id));
        let format = self.format.or(config.format).unwrap_or_default();
        let output_dir = self
            .output
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        Ok(ExportPlan { presets, format, output_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("fontgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn repeated_fonts_keep_their_order() {
        let args = parse(&["-f", "klm", "--font", "vkr", "--format", "svg", "-vv"]);
        assert_eq!(args.fonts, ["klm", "vkr"]);
        assert_eq!(args.format, Some(ExportFormat::Svg));
        assert_eq!(args.verbose, 2);
        let plan = args.plan(&ConfigFile::default()).unwrap();
        let ids: Vec<_> = plan.presets.iter().map(|preset| preset.id).collect();
        assert_eq!(ids, ["klm", "vkr"]);
        assert_eq!(plan.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn repeated_ids_are_planned_once() {
        let plan = parse(&["-f", "klm", "-f", "vkr", "-f", "klm"]).plan(&ConfigFile::default()).unwrap();
        let ids: Vec<_> = plan.presets.iter().map(|preset| preset.id).collect();
        assert_eq!(ids, ["klm", "vkr"]);

        let config = ConfigFile {
            default_fonts: Some(vec!["klb".to_string(), "klb".to_string()]),
            ..ConfigFile::default()
        };
        let plan = parse(&[]).plan(&config).unwrap();
        assert_eq!(plan.presets.len(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let error = parse(&["-f", "vkr", "-f", "zz"]).validate().unwrap_err();
        assert!(error.starts_with("Unknown font id: zz"));
    }

    #[test]
    fn all_conflicts_with_font() {
        assert!(CliArgs::try_parse_from(["fontgen", "--all", "-f", "vkr"]).is_err());
    }

    #[test]
    fn cli_overrides_settings() {
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("from-config")),
            default_fonts: Some(vec!["klb".to_string()]),
            format: Some(ExportFormat::Json),
        };
        let plan = parse(&[]).plan(&config).unwrap();
        assert_eq!(plan.presets.len(), 1);
        assert_eq!(plan.presets[0].id, "klb");
        assert_eq!(plan.format, ExportFormat::Json);
        assert_eq!(plan.output_dir, PathBuf::from("from-config"));

        let plan = parse(&["-o", "elsewhere", "--format", "ufo", "-f", "vkt"]).plan(&config).unwrap();
        assert_eq!(plan.presets[0].id, "vkt");
        assert_eq!(plan.format, ExportFormat::Ufo);
        assert_eq!(plan.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn defaults_export_everything_as_ufo() {
        let plan = parse(&[]).plan(&ConfigFile::default()).unwrap();
        assert_eq!(plan.presets.len(), presets::all().len());
        assert_eq!(plan.format, ExportFormat::Ufo);
    }

    #[test]
    fn bad_settings_ids_are_reported() {
        let config = ConfigFile { default_fonts: Some(vec!["bogus".to_string()]), ..ConfigFile::default() };
        assert!(parse(&[]).plan(&config).is_err());
    }
}
