//! Filename classification.
//!
//! OMSI does not mark its data files with distinct extensions, so apart from
//! scripts and overlays the category comes from keywords in the file name.

use std::fmt;

/// Extension of script files.
pub const SCRIPT_EXTENSION: &str = ".osc";
/// Extension of documentation overlays.
pub const VARDOC_EXTENSION: &str = ".vardoc";
/// Extension shared by varlists, stringvarlists and constfiles.
pub const TEXT_EXTENSION: &str = ".txt";

const CONST_KEYWORDS: &[&str] = &["constfile", "constlist"];
const STRING_LIST_KEYWORDS: &[&str] = &["stringvarlist", "stringvarnamelist", "stringlist"];

/// What kind of file a name represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Script,
    Varlist,
    StringVarlist,
    ConstFile,
    VarDoc,
    Unrecognized,
}

impl Category {
    /// Human-readable name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Script => "script",
            Category::Varlist => "varlist",
            Category::StringVarlist => "stringvarlist",
            Category::ConstFile => "constfile",
            Category::VarDoc => "vardoc",
            Category::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Classify a bare file name.
///
/// First match wins: `.osc`, `.vardoc`, anything not `.txt` is
/// unrecognized, then const keywords before stringlist keywords. Every
/// other `.txt` file, `*_varlist.txt` or not, is a varlist.
/// Matching is case-sensitive.
pub fn classify(file_name: &str) -> Category {
    if file_name.ends_with(SCRIPT_EXTENSION) {
        return Category::Script;
    }

    if file_name.ends_with(VARDOC_EXTENSION) {
        return Category::VarDoc;
    }

    if !file_name.ends_with(TEXT_EXTENSION) {
        return Category::Unrecognized;
    }

    if contains_any(file_name, CONST_KEYWORDS) {
        Category::ConstFile
    } else if contains_any(file_name, STRING_LIST_KEYWORDS) {
        Category::StringVarlist
    } else {
        Category::Varlist
    }
}
