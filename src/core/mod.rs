//! Core application functionality
//!
//! This module contains the command line side of fontgen:
//! - CLI parsing and the settings file
//! - Font presets
//! - Error helpers and platform glue
//! - The export runner

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod presets;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, ExportPlan};
pub use config_file::ConfigFile;
pub use presets::Preset;
pub use runner::run_app;
