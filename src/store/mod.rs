//! In-memory merge target for everything the parsers find.
//!
//! The store keeps four independent namespaces keyed by symbol name. Inserting
//! a name that already exists in a namespace replaces the earlier record, so
//! the last definition wins. The same name may appear in several namespaces.
//!
//! # Example
//!
//! ```ignore
//! use omsidoc::store::{Symbol, SymbolKind, SymbolStore};
//!
//! let mut store = SymbolStore::new();
//! store.insert(Symbol::new(SymbolKind::Var, "Speed", "vars.txt"));
//! store.document(SymbolKind::Var, "Speed", "Current vehicle speed");
//! ```

pub mod types;

use std::collections::HashMap;

pub use types::{RefKind, SourceLocation, Symbol, SymbolKind};

/// Four namespaces of symbols for one documentation run.
#[derive(Debug, Default)]
pub struct SymbolStore {
    vars: HashMap<String, Symbol>,
    string_vars: HashMap<String, Symbol>,
    consts: HashMap<String, Symbol>,
    curves: HashMap<String, Symbol>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, kind: SymbolKind) -> &HashMap<String, Symbol> {
        match kind {
            SymbolKind::Var => &self.vars,
            SymbolKind::StringVar => &self.string_vars,
            SymbolKind::Const => &self.consts,
            SymbolKind::Curve => &self.curves,
        }
    }

    fn namespace_mut(&mut self, kind: SymbolKind) -> &mut HashMap<String, Symbol> {
        match kind {
            SymbolKind::Var => &mut self.vars,
            SymbolKind::StringVar => &mut self.string_vars,
            SymbolKind::Const => &mut self.consts,
            SymbolKind::Curve => &mut self.curves,
        }
    }

    /// Insert a symbol into the namespace of its kind, replacing any
    /// earlier symbol of the same name.
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.namespace_mut(symbol.kind)
            .insert(symbol.name.clone(), symbol)
    }

    /// Attach an overlay description.
    ///
    /// An existing symbol keeps its source file and deleted flag and only
    /// gets the new description. An unknown name becomes a deleted
    /// placeholder. Returns true when a placeholder was created.
    pub fn document(&mut self, kind: SymbolKind, name: &str, description: &str) -> bool {
        let namespace = self.namespace_mut(kind);
        match namespace.get_mut(name) {
            Some(symbol) => {
                symbol.description = description.to_string();
                false
            }
            None => {
                namespace.insert(
                    name.to_string(),
                    Symbol::placeholder(kind, name, description),
                );
                true
            }
        }
    }

    /// Get a symbol by kind and name.
    pub fn get(&self, kind: SymbolKind, name: &str) -> Option<&Symbol> {
        self.namespace(kind).get(name)
    }

    /// Number of symbols of a kind.
    pub fn count(&self, kind: SymbolKind) -> usize {
        self.namespace(kind).len()
    }

    /// Number of deleted placeholders across all namespaces.
    pub fn deleted_count(&self) -> usize {
        SymbolKind::ALL
            .iter()
            .flat_map(|&kind| self.namespace(kind).values())
            .filter(|s| s.deleted)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        SymbolKind::ALL.iter().all(|&kind| self.count(kind) == 0)
    }

    /// Symbols of a kind sorted by name.
    pub fn sorted(&self, kind: SymbolKind) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.namespace(kind).values().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }
}
