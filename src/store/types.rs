//! Symbol records held by the store.

use std::collections::BTreeSet;
use std::fmt;

/// The four namespaces a symbol can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Var,
    StringVar,
    Const,
    Curve,
}

impl SymbolKind {
    /// All kinds in rendering order.
    pub const ALL: [SymbolKind; 4] = [
        SymbolKind::Var,
        SymbolKind::StringVar,
        SymbolKind::Const,
        SymbolKind::Curve,
    ];

    /// Human-readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Var => "var",
            SymbolKind::StringVar => "stringvar",
            SymbolKind::Const => "const",
            SymbolKind::Curve => "curve",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a script touches a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefKind {
    Read,
    Write,
    Invoke,
}

/// A place in a script file that refers to a symbol.
///
/// Not filled by any parser yet; script cross-referencing will populate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
    pub kind: RefKind,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize, kind: RefKind) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A variable, string variable, constant or curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    /// Relative path of the defining file. Empty for overlay-only symbols.
    pub source_file: String,
    /// Free text, lines separated by `\n`.
    pub description: String,
    /// Documented in an overlay but not defined anywhere.
    pub deleted: bool,
    /// Numeric value; only constants carry one, and only when it parsed.
    pub value: Option<f64>,
    pub references: BTreeSet<SourceLocation>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            source_file: source_file.into(),
            description: String::new(),
            deleted: false,
            value: None,
            references: BTreeSet::new(),
        }
    }

    /// A placeholder for a name only an overlay knows about.
    pub fn placeholder(
        kind: SymbolKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            deleted: true,
            ..Self::new(kind, name, "")
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    /// Record a script reference. Duplicate locations collapse.
    pub fn add_reference(&mut self, location: SourceLocation) -> bool {
        self.references.insert(location)
    }
}
