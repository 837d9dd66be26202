//! File system walk for discovering OMSI script data files.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::report::{Diagnostic, Reporter, WALK};

use super::classify::{classify, Category};

/// Deepest directory level a recursive walk descends into.
pub const MAX_DEPTH: usize = 64;

/// Files found by a walk, by category, relative to the walk root.
#[derive(Debug, Default, Serialize)]
pub struct WorkingFiles {
    /// Discovered script files (not parsed yet).
    pub scripts: Vec<PathBuf>,
    /// Discovered varlists.
    pub varlists: Vec<PathBuf>,
    /// Discovered stringvarlists.
    pub string_varlists: Vec<PathBuf>,
    /// Discovered constfiles.
    pub const_files: Vec<PathBuf>,
    /// Discovered documentation overlays.
    pub var_docs: Vec<PathBuf>,
}

impl WorkingFiles {
    /// Create a new empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.scripts.len()
            + self.varlists.len()
            + self.string_varlists.len()
            + self.const_files.len()
            + self.var_docs.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Record a file under its category. Unrecognized files are dropped.
    pub fn push(&mut self, category: Category, path: PathBuf) {
        match category {
            Category::Script => self.scripts.push(path),
            Category::Varlist => self.varlists.push(path),
            Category::StringVarlist => self.string_varlists.push(path),
            Category::ConstFile => self.const_files.push(path),
            Category::VarDoc => self.var_docs.push(path),
            Category::Unrecognized => {}
        }
    }

    /// Get files of a specific category.
    pub fn files_of(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::Script => &self.scripts,
            Category::Varlist => &self.varlists,
            Category::StringVarlist => &self.string_varlists,
            Category::ConstFile => &self.const_files,
            Category::VarDoc => &self.var_docs,
            Category::Unrecognized => &[],
        }
    }
}

/// Files before directories, then by name, so every directory lists its
/// own files before descending.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk a directory and classify every regular file in it.
///
/// Without `recursive` only the files directly inside `root` are looked at.
/// Symbolic links are followed; link cycles and unreadable directories are
/// reported and skipped, and the walk never goes deeper than [`MAX_DEPTH`].
pub fn walk(root: &Path, recursive: bool, reporter: &mut dyn Reporter) -> WorkingFiles {
    let mut files = WorkingFiles::new();
    let max_depth = if recursive { MAX_DEPTH } else { 1 };

    let walker = WalkDir::new(root)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by(files_first);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                reporter.report(walk_diagnostic(root, &err));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let category = classify(&entry.file_name().to_string_lossy());
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.push(category, relative);
    }

    files
}

fn walk_diagnostic(root: &Path, err: &walkdir::Error) -> Diagnostic {
    let path = err.path().unwrap_or(root);
    if let Some(ancestor) = err.loop_ancestor() {
        Diagnostic::warning(
            WALK,
            format!(
                "skipping {}: symbolic link loops back to {}",
                path.display(),
                ancestor.display()
            ),
        )
    } else {
        Diagnostic::warning(WALK, format!("cannot list {}: {}", path.display(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Diagnostics;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walk_empty_directory() {
        let dir = tempdir().unwrap();
        let mut diagnostics = Diagnostics::new();

        let files = walk(dir.path(), true, &mut diagnostics);

        assert!(files.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_walk_partitions_by_category() {
        let dir = tempdir().unwrap();
        for name in [
            "main.osc",
            "main_varlist.txt",
            "main_stringvarlist.txt",
            "main_constfile.txt",
            "main.vardoc",
            "readme.md",
        ] {
            touch(dir.path(), name);
        }

        let files = walk(dir.path(), false, &mut Diagnostics::new());

        assert_eq!(files.scripts, vec![PathBuf::from("main.osc")]);
        assert_eq!(files.varlists, vec![PathBuf::from("main_varlist.txt")]);
        assert_eq!(files.string_varlists.len(), 1);
        assert_eq!(files.const_files.len(), 1);
        assert_eq!(files.var_docs.len(), 1);
        assert_eq!(files.total(), 5);
    }

    #[test]
    fn test_walk_non_recursive_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "top_varlist.txt");
        touch(dir.path(), "engine/engine_varlist.txt");

        let files = walk(dir.path(), false, &mut Diagnostics::new());

        assert_eq!(files.varlists, vec![PathBuf::from("top_varlist.txt")]);
    }

    #[test]
    fn test_walk_recursive_paths_relative_to_root() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "z_varlist.txt");
        touch(dir.path(), "a/b/deep_varlist.txt");
        touch(dir.path(), "a/a_varlist.txt");

        let files = walk(dir.path(), true, &mut Diagnostics::new());

        assert_eq!(
            files.varlists,
            vec![
                PathBuf::from("z_varlist.txt"),
                PathBuf::from("a/a_varlist.txt"),
                PathBuf::from("a/b/deep_varlist.txt"),
            ]
        );
    }

    #[test]
    fn test_walk_missing_root_warns() {
        let mut diagnostics = Diagnostics::new();

        let files = walk(Path::new("/nonexistent/omsi/path"), true, &mut diagnostics);

        assert!(files.is_empty());
        assert_eq!(diagnostics.with_code(WALK).count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_survives_symlink_loop() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "sub/sub_varlist.txt");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/back")).unwrap();

        let mut diagnostics = Diagnostics::new();
        let files = walk(dir.path(), true, &mut diagnostics);

        assert_eq!(files.varlists, vec![PathBuf::from("sub/sub_varlist.txt")]);
        assert_eq!(diagnostics.with_code(WALK).count(), 1);
    }

    #[test]
    fn test_files_of_category() {
        let mut files = WorkingFiles::new();
        files.push(Category::ConstFile, PathBuf::from("a_constfile.txt"));
        files.push(Category::Unrecognized, PathBuf::from("readme.md"));

        assert_eq!(files.files_of(Category::ConstFile).len(), 1);
        assert_eq!(files.files_of(Category::Unrecognized).len(), 0);
        assert_eq!(files.total(), 1);
    }
}
