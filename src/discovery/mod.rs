//! File discovery and symbol loading for OMSI script projects.
//!
//! This module finds every varlist, stringvarlist, constfile, overlay and
//! script below a project directory and feeds their contents into a
//! [`SymbolStore`].
//!
//! # Example
//!
//! ```ignore
//! use omsidoc::discovery::discover;
//! use omsidoc::report::Diagnostics;
//!
//! let mut diagnostics = Diagnostics::new();
//! let result = discover("./Scripts/MAN_SD200", &mut diagnostics)?;
//! println!("Found {} files", result.files.total());
//!
//! let store = result.load(&mut diagnostics);
//! ```

mod classify;
mod loader;
mod scanner;
mod settings;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::Reporter;
use crate::store::SymbolStore;

pub use classify::{classify, Category};
pub use loader::{apply_overlays, load_const_files, load_lists, load_symbols, source_name, OverlayStats};
pub use scanner::{walk, WorkingFiles, MAX_DEPTH};
pub use settings::{Settings, LEGACY_SETTINGS_FILENAME, SETTINGS_FILENAME};

/// Result of discovering files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded settings (default if no settings file was found).
    pub settings: Settings,

    /// The settings file the settings came from, if any.
    pub settings_file: Option<PathBuf>,

    /// Discovered files, relative to `root`.
    pub files: WorkingFiles,
}

impl DiscoveryResult {
    /// Parse all discovered files into a symbol store.
    pub fn load(&self, reporter: &mut dyn Reporter) -> SymbolStore {
        load_symbols(&self.root, &self.files, reporter)
    }
}

/// Discover files in a project directory.
///
/// Loads the project's settings first, since they decide whether the walk
/// descends into subdirectories.
pub fn discover(root: impl AsRef<Path>, reporter: &mut dyn Reporter) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (settings, settings_file) = Settings::discover(&root)?;
    Ok(discover_with(root, settings, settings_file, reporter))
}

/// Discover files with settings supplied by the caller.
pub fn discover_with(
    root: PathBuf,
    settings: Settings,
    settings_file: Option<PathBuf>,
    reporter: &mut dyn Reporter,
) -> DiscoveryResult {
    let files = walk(&root, settings.recursive, reporter);

    DiscoveryResult {
        root,
        settings,
        settings_file,
        files,
    }
}
