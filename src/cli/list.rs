//! List command implementation.
//!
//! Discovers files and prints them grouped by category.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_with, source_name, Category, Settings, WorkingFiles};
use crate::error::{DocError, Result};
use crate::output::{plural, Printer};

use super::build::ensure_directory;

/// List the files a build would read
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Scan subdirectories too
    #[arg(long, short)]
    pub recursive: bool,

    /// Print the file manifest as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

const GROUPS: &[(Category, &str, &str)] = &[
    (Category::Script, "script", "scripts"),
    (Category::Varlist, "varlist", "varlists"),
    (Category::StringVarlist, "stringvarlist", "stringvarlists"),
    (Category::ConstFile, "constfile", "constfiles"),
    (Category::VarDoc, "overlay", "overlays"),
];

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    ensure_directory(&args.path)?;

    let (mut settings, settings_file) = Settings::discover(&args.path)?;
    settings.recursive |= args.recursive;

    let mut sink = printer;
    let discovery = discover_with(args.path, settings, settings_file, &mut sink);

    if args.json {
        let json = manifest_json(&discovery.files)?;
        println!("{}", json);
    } else {
        print_inventory(&discovery.files, printer);
    }

    Ok(())
}

fn manifest_json(files: &WorkingFiles) -> Result<String> {
    serde_json::to_string_pretty(files).map_err(|e| DocError::Output {
        message: format!("Failed to serialize file list: {}", e),
        help: None,
    })
}

fn print_inventory(files: &WorkingFiles, printer: &Printer) {
    for (category, singular, pluralized) in GROUPS {
        let paths = files.files_of(*category);
        printer.info("Found", &plural(paths.len(), singular, pluralized));
        for path in paths {
            printer.info("", &printer.dim(&source_name(path)));
        }
    }
}
