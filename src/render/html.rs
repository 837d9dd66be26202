//! Symbol tables as HTML.

use std::borrow::Cow;

use crate::store::{Symbol, SymbolKind, SymbolStore};

/// Renders the four namespaces of a store as HTML tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    escape: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape names, descriptions and paths. Without it text is inserted
    /// as-is, markup included.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Render the table for one namespace, sorted by name.
    pub fn render(&self, store: &SymbolStore, kind: SymbolKind) -> String {
        let with_value = kind == SymbolKind::Const;
        let mut html = String::from("<table><tr><th>Name</th>");
        if with_value {
            html.push_str("<th>Value</th>");
        }
        html.push_str("<th>Description</th><th>File</th></tr>");

        for symbol in store.sorted(kind) {
            self.push_row(&mut html, symbol, with_value);
        }

        html.push_str("</table>");
        html
    }

    fn push_row(&self, html: &mut String, symbol: &Symbol, with_value: bool) {
        let mut name = self.text(&symbol.name).into_owned();
        if symbol.deleted {
            name = format!("<del>{}</del>", name);
        }

        let description = self.text(&symbol.description).replace('\n', "<br />");

        html.push_str(&format!("<tr><td>{}</td>", name));
        if with_value {
            let value = symbol.value.map(|v| v.to_string()).unwrap_or_default();
            html.push_str(&format!("<td>{}</td>", value));
        }
        html.push_str(&format!(
            "<td>{}</td><td>{}</td></tr>",
            description,
            self.text(&symbol.source_file)
        ));
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Replace the characters HTML treats as markup with entities.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(symbols: Vec<Symbol>) -> SymbolStore {
        let mut store = SymbolStore::new();
        for symbol in symbols {
            store.insert(symbol);
        }
        store
    }

    #[test]
    fn test_render_empty_table() {
        let html = TableRenderer::new().render(&SymbolStore::new(), SymbolKind::Var);

        insta::assert_snapshot!(html, @"<table><tr><th>Name</th><th>Description</th><th>File</th></tr></table>");
    }

    #[test]
    fn test_render_vars_sorted() {
        let store = store_with(vec![
            Symbol::new(SymbolKind::Var, "Speed", "varlist.txt"),
            Symbol::new(SymbolKind::Var, "RPM", "varlist.txt"),
        ]);

        let html = TableRenderer::new().render(&store, SymbolKind::Var);

        insta::assert_snapshot!(html, @"<table><tr><th>Name</th><th>Description</th><th>File</th></tr><tr><td>RPM</td><td></td><td>varlist.txt</td></tr><tr><td>Speed</td><td></td><td>varlist.txt</td></tr></table>");
    }

    #[test]
    fn test_render_const_values() {
        let store = store_with(vec![
            Symbol::new(SymbolKind::Const, "MaxSpeed", "constfile.txt")
                .with_value(Some(120.5))
                .with_description("Top speed\nin km/h"),
            Symbol::new(SymbolKind::Const, "Broken", "constfile.txt"),
        ]);

        let html = TableRenderer::new().render(&store, SymbolKind::Const);

        insta::assert_snapshot!(html, @"<table><tr><th>Name</th><th>Value</th><th>Description</th><th>File</th></tr><tr><td>Broken</td><td></td><td></td><td>constfile.txt</td></tr><tr><td>MaxSpeed</td><td>120.5</td><td>Top speed<br />in km/h</td><td>constfile.txt</td></tr></table>");
    }

    #[test]
    fn test_render_deleted_struck_through() {
        let store = store_with(vec![Symbol::placeholder(
            SymbolKind::StringVar,
            "Sign",
            "Old sign text",
        )]);

        let html = TableRenderer::new().render(&store, SymbolKind::StringVar);

        assert!(html.contains("<tr><td><del>Sign</del></td><td>Old sign text</td><td></td></tr>"));
    }

    #[test]
    fn test_integral_value_has_no_fraction() {
        let store = store_with(vec![
            Symbol::new(SymbolKind::Const, "Doors", "constfile.txt").with_value(Some(3.0)),
        ]);

        let html = TableRenderer::new().render(&store, SymbolKind::Const);

        assert!(html.contains("<td>Doors</td><td>3</td>"));
    }

    #[test]
    fn test_markup_passes_through_without_escaping() {
        let store = store_with(vec![Symbol::new(SymbolKind::Var, "a<b", "x.txt")
            .with_description("<i>raw</i>")]);

        let html = TableRenderer::new().render(&store, SymbolKind::Var);

        assert!(html.contains("<td>a<b</td><td><i>raw</i></td>"));
    }

    #[test]
    fn test_markup_escaped_when_enabled() {
        let store = store_with(vec![Symbol::placeholder(SymbolKind::Var, "a<b", "x & y\nz")]);

        let html = TableRenderer::new().with_escaping(true).render(&store, SymbolKind::Var);

        assert!(html.contains("<td><del>a&lt;b</del></td><td>x &amp; y<br />z</td>"));
    }

    #[test]
    fn test_escape_html_borrows_clean_text() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_html("\"'"), "&quot;&#39;");
    }
}
