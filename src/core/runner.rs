//! Application runner logic
//!
//! Handles the different ways to run fontgen: listing presets or exporting
//! the selected fonts.

use crate::core::cli::{CliArgs, ExportPlan};
use crate::core::config_file::ConfigFile;
use crate::core::presets;
use crate::data;
use crate::logging;
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::thread;
use tracing::info;

/// Run fontgen with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.list {
        for preset in presets::all() {
            println!("{:<6} {}", preset.id, preset.create().full_name());
        }
        return Ok(());
    }

    let _guard = logging::init(cli_args.verbose, cli_args.log_file)?;
    let config = ConfigFile::load();
    let plan = cli_args.plan(&config).map_err(|message| anyhow!(message))?;
    let written = export_all(&plan)?;
    info!(fonts = written.len(), "done");
    Ok(())
}

/// Export every font of `plan`, each into `<output_dir>/<preset id>/`.
///
/// Fonts are generated on their own threads; the first failure is returned
/// after all of them have finished.
pub fn export_all(plan: &ExportPlan) -> Result<Vec<PathBuf>> {
    thread::scope(|scope| {
        let handles: Vec<_> = plan
            .presets
            .iter()
            .map(|preset| {
                let dir = plan.output_dir.join(preset.id);
                scope.spawn(move || {
                    let font = preset.create();
                    info!(id = preset.id, font = %font.full_name(), "generating");
                    data::export(&font, plan.format, &dir)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("export thread panicked"))?)
            .collect()
    })
}
