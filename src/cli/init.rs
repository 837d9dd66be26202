//! Init command implementation.
//!
//! Writes an `omsidoc.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Settings, SETTINGS_FILENAME};
use crate::error::{DocError, Result};
use crate::output::{display_path, Printer};

/// Initialize a project by generating an omsidoc.yaml settings file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing omsidoc.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(SETTINGS_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(DocError::Output {
            message: format!("{} already exists", SETTINGS_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&Settings::default()).map_err(|e| DocError::Output {
        message: format!("Failed to serialize settings: {}", e),
        help: None,
    })?;

    fs::write(&settings_path, yaml).map_err(|e| DocError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&settings_path));

    Ok(())
}
