//! Build command implementation.
//!
//! Runs the whole pipeline: discovery, varlists, constfiles, overlays,
//! rendering. Parse problems are printed as warnings and never stop the
//! run; only failing to write the output does.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{
    apply_overlays, load_const_files, load_lists, walk, Settings, WorkingFiles,
};
use crate::error::{DocError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_index, PageRenderer};
use crate::report::Tee;
use crate::store::{SymbolKind, SymbolStore};

/// Generate the HTML reference for a script folder
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output directory (overrides the settings file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Page title (overrides the settings file)
    #[arg(long)]
    pub title: Option<String>,

    /// Scan subdirectories too
    #[arg(long, short)]
    pub recursive: bool,

    /// Escape names and descriptions for HTML
    #[arg(long)]
    pub escape_html: bool,
}

impl BuildArgs {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }
        settings.recursive |= self.recursive;
        settings.escape_html |= self.escape_html;
        settings
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let root = args.path.clone();
    ensure_directory(&root)?;

    let (settings, settings_file) = Settings::discover(&root)?;
    let settings = args.apply(settings);

    if let Some(file) = &settings_file {
        printer.info("Settings", &display_path(file));
    }

    let mut sink = printer;
    let mut reporter = Tee::new(&mut sink);

    printer.status("Scanning", &display_path(&root));
    let files = walk(&root, settings.recursive, &mut reporter);
    print_manifest_counts(&files, printer);

    let mut store = SymbolStore::new();

    printer.status(
        "Reading",
        &format!(
            "{}, {}",
            plural(files.varlists.len(), "varlist", "varlists"),
            plural(files.string_varlists.len(), "stringvarlist", "stringvarlists")
        ),
    );
    load_lists(&root, &files, &mut store, &mut reporter);

    printer.status(
        "Reading",
        &plural(files.const_files.len(), "constfile", "constfiles"),
    );
    load_const_files(&root, &files, &mut store, &mut reporter);

    printer.status(
        "Applying",
        &plural(files.var_docs.len(), "overlay", "overlays"),
    );
    let overlays = apply_overlays(&root, &files, &mut store, &mut reporter);
    if overlays.orphaned > 0 {
        printer.info(
            "Documented",
            &format!(
                "{} without a definition",
                plural(overlays.orphaned, "name", "names")
            ),
        );
    }

    let warnings = reporter.into_seen().len();

    let html = PageRenderer::new(&settings.title)
        .with_escaping(settings.escape_html)
        .render(&store);
    let index = write_index(&html, &settings.output_dir(&root))?;

    printer.success(
        "Finished",
        &format!(
            "{} ({}, {}, {}, {}; {})",
            display_path(&index),
            plural(store.count(SymbolKind::Var), "var", "vars"),
            plural(store.count(SymbolKind::StringVar), "stringvar", "stringvars"),
            plural(store.count(SymbolKind::Const), "const", "consts"),
            plural(store.count(SymbolKind::Curve), "curve", "curves"),
            plural(warnings, "warning", "warnings"),
        ),
    );

    Ok(())
}

pub(crate) fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(DocError::Io {
            path: path.to_path_buf(),
            message: "not a directory".to_string(),
        })
    }
}

fn print_manifest_counts(files: &WorkingFiles, printer: &Printer) {
    printer.info(
        "Found",
        &format!(
            "{}, {}, {}, {}, {}",
            plural(files.scripts.len(), "script", "scripts"),
            plural(files.varlists.len(), "varlist", "varlists"),
            plural(files.string_varlists.len(), "stringvarlist", "stringvarlists"),
            plural(files.const_files.len(), "constfile", "constfiles"),
            plural(files.var_docs.len(), "overlay", "overlays"),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::SETTINGS_FILENAME;
    use std::fs;
    use tempfile::tempdir;

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main_varlist.txt"), "Speed\r\nRPM\r\n").unwrap();
        fs::write(
            dir.path().join("main_constfile.txt"),
            "Comment line\r\n[const]\r\nMaxSpeed\r\n120.5\r\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_build_writes_index() {
        let dir = project();

        let args = BuildArgs {
            path: dir.path().to_path_buf(),
            ..Default::default()
        };
        run(args, &Printer::new()).unwrap();

        let html = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();
        assert!(html.contains("<td>RPM</td>"));
        assert!(html.contains("<td>MaxSpeed</td><td>120.5</td><td>Comment line</td>"));
        assert!(html.contains("<title>OMSI Script Documentation</title>"));
    }

    #[test]
    fn test_build_cli_overrides_settings() {
        let dir = project();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            "output: from-settings\ntitle: Settings Title\n",
        )
        .unwrap();

        let args = BuildArgs {
            path: dir.path().to_path_buf(),
            title: Some("Flag Title".to_string()),
            ..Default::default()
        };
        run(args, &Printer::new()).unwrap();

        let html =
            fs::read_to_string(dir.path().join("from-settings").join("index.html")).unwrap();
        assert!(html.contains("<h1>Flag Title</h1>"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = project();
        fs::write(
            dir.path().join("main.vardoc"),
            "[vars]\r\nSpeed=Current vehicle speed\r\nGone=Removed\r\n",
        )
        .unwrap();
        let index = dir.path().join("docs/index.html");

        let args = || BuildArgs {
            path: dir.path().to_path_buf(),
            ..Default::default()
        };
        run(args(), &Printer::new()).unwrap();
        let first = fs::read(&index).unwrap();
        run(args(), &Printer::new()).unwrap();
        let second = fs::read(&index).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_survives_broken_input() {
        let dir = project();
        fs::write(
            dir.path().join("broken_constfile.txt"),
            "[const]\r\nGain\r\nnot-a-number\r\n[newcurve]\r\n",
        )
        .unwrap();

        let args = BuildArgs {
            path: dir.path().to_path_buf(),
            ..Default::default()
        };
        run(args, &Printer::new()).unwrap();

        let html = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();
        assert!(html.contains("<td>Gain</td><td></td>"));
    }

    #[test]
    fn test_build_fails_when_output_blocked() {
        let dir = project();
        fs::write(dir.path().join("docs"), "a file where the directory should be").unwrap();

        let args = BuildArgs {
            path: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(matches!(
            run(args, &Printer::new()),
            Err(DocError::Output { .. })
        ));
    }

    #[test]
    fn test_build_missing_project_directory() {
        let args = BuildArgs {
            path: PathBuf::from("/nonexistent/omsi/project"),
            ..Default::default()
        };

        assert!(run(args, &Printer::new()).is_err());
    }
}
