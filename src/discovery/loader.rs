//! Symbol loader - parses discovered files into the store.
//!
//! Runs in three passes that must happen in order: lists, constfiles,
//! overlays. Overlays go last so they see the final set of defined names.
//! No pass ever fails; unreadable files and bad blocks are reported and
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::{parse_block_file, parse_list, parse_overlay, BlockIssue, BlockKind};
use crate::report::{Diagnostic, Reporter, CONST_VALUE, READ, TRUNCATED_BLOCK};
use crate::store::{Symbol, SymbolKind, SymbolStore};

use super::scanner::WorkingFiles;

/// Counts from the overlay pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStats {
    /// Descriptions attached to defined symbols.
    pub documented: usize,
    /// Placeholders created for names nothing defines.
    pub orphaned: usize,
}

/// Run all three passes into a fresh store.
pub fn load_symbols(root: &Path, files: &WorkingFiles, reporter: &mut dyn Reporter) -> SymbolStore {
    let mut store = SymbolStore::new();
    load_lists(root, files, &mut store, reporter);
    load_const_files(root, files, &mut store, reporter);
    apply_overlays(root, files, &mut store, reporter);
    store
}

/// Load every varlist and stringvarlist.
pub fn load_lists(
    root: &Path,
    files: &WorkingFiles,
    store: &mut SymbolStore,
    reporter: &mut dyn Reporter,
) {
    let lists = files
        .varlists
        .iter()
        .map(|path| (path, SymbolKind::Var))
        .chain(
            files
                .string_varlists
                .iter()
                .map(|path| (path, SymbolKind::StringVar)),
        );

    for (path, kind) in lists {
        let Some(source) = read_source(root, path, reporter) else {
            continue;
        };
        let file = source_name(path);
        for name in parse_list(&source) {
            store.insert(Symbol::new(kind, name, file.clone()));
        }
    }
}

/// Load every constfile.
pub fn load_const_files(
    root: &Path,
    files: &WorkingFiles,
    store: &mut SymbolStore,
    reporter: &mut dyn Reporter,
) {
    for path in &files.const_files {
        let Some(source) = read_source(root, path, reporter) else {
            continue;
        };
        let file = source_name(path);
        let parsed = parse_block_file(&source);

        for issue in &parsed.issues {
            reporter.report(issue_diagnostic(&file, issue));
        }

        for block in parsed.blocks {
            let kind = match block.kind {
                BlockKind::Const => SymbolKind::Const,
                BlockKind::Curve => SymbolKind::Curve,
            };
            store.insert(
                Symbol::new(kind, block.name, file.clone())
                    .with_description(block.description)
                    .with_value(block.value),
            );
        }
    }
}

/// Apply every `.vardoc` overlay to the var and stringvar namespaces.
pub fn apply_overlays(
    root: &Path,
    files: &WorkingFiles,
    store: &mut SymbolStore,
    reporter: &mut dyn Reporter,
) -> OverlayStats {
    let mut stats = OverlayStats::default();

    for path in &files.var_docs {
        let Some(source) = read_source(root, path, reporter) else {
            continue;
        };
        let overlay = parse_overlay(&source);

        let entries = overlay
            .vars
            .iter()
            .map(|entry| (SymbolKind::Var, entry))
            .chain(
                overlay
                    .string_vars
                    .iter()
                    .map(|entry| (SymbolKind::StringVar, entry)),
            );

        for (kind, (name, description)) in entries {
            if store.document(kind, name, description) {
                stats.orphaned += 1;
            } else {
                stats.documented += 1;
            }
        }
    }

    stats
}

fn issue_diagnostic(file: &str, issue: &BlockIssue) -> Diagnostic {
    let message = format!("{}: {}", file, issue);
    match issue {
        BlockIssue::InvalidValue { .. } => Diagnostic::warning(CONST_VALUE, message)
            .with_help("The constant is still listed, without a value"),
        BlockIssue::Truncated { .. } => Diagnostic::warning(TRUNCATED_BLOCK, message)
            .with_help("A block needs a name line and a value line after its marker"),
    }
}

/// Read a file as text. Bytes that are not UTF-8 are replaced rather than
/// rejected, since OMSI files are commonly saved in a Windows code page.
fn read_source(root: &Path, relative: &Path, reporter: &mut dyn Reporter) -> Option<String> {
    let path: PathBuf = root.join(relative);
    match fs::read(&path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            reporter.report(Diagnostic::warning(
                READ,
                format!("cannot read {}: {}", relative.display(), e),
            ));
            None
        }
    }
}

/// Relative path as shown in the generated tables, `/`-separated.
pub fn source_name(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
