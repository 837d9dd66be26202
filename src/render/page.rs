//! Page assembly and output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocError, Result};
use crate::store::{SymbolKind, SymbolStore};

use super::html::{escape_html, TableRenderer};

/// Page template shipped with the tool.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/template.html");

/// Stylesheet shipped with the tool.
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/style.css");

/// Name of the generated file.
pub const INDEX_FILENAME: &str = "index.html";

/// Renders a whole documentation page from a template.
///
/// The template may use `${TITLE}`, `${STYLE}`, `${VARS}`, `${STRINGVARS}`,
/// `${CONSTS}` and `${CURVES}`. Unknown placeholders are left untouched.
#[derive(Debug, Clone)]
pub struct PageRenderer<'a> {
    title: &'a str,
    template: &'a str,
    stylesheet: &'a str,
    escape: bool,
}

impl<'a> PageRenderer<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            template: DEFAULT_TEMPLATE,
            stylesheet: DEFAULT_STYLESHEET,
            escape: false,
        }
    }

    pub fn with_template(mut self, template: &'a str) -> Self {
        self.template = template;
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: &'a str) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Render the page for a store.
    pub fn render(&self, store: &SymbolStore) -> String {
        let tables = TableRenderer::new().with_escaping(self.escape);
        let title = if self.escape {
            escape_html(self.title).into_owned()
        } else {
            self.title.to_string()
        };
        let style: String = self
            .stylesheet
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect();

        let vars = tables.render(store, SymbolKind::Var);
        let string_vars = tables.render(store, SymbolKind::StringVar);
        let consts = tables.render(store, SymbolKind::Const);
        let curves = tables.render(store, SymbolKind::Curve);

        fill_template(self.template, |key| match key {
            "TITLE" => Some(title.as_str()),
            "STYLE" => Some(style.as_str()),
            "VARS" => Some(vars.as_str()),
            "STRINGVARS" => Some(string_vars.as_str()),
            "CONSTS" => Some(consts.as_str()),
            "CURVES" => Some(curves.as_str()),
            _ => None,
        })
    }
}

/// Substitute `${KEY}` placeholders in one pass.
///
/// Substituted text is never scanned again, so a description containing
/// `${CONSTS}` stays literal.
pub fn fill_template<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Write the rendered page as `index.html` into `dir`, creating it if needed.
pub fn write_index(html: &str, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| DocError::Output {
        message: format!("Failed to create output directory {}: {}", dir.display(), e),
        help: Some("Check the output path in the settings or pass --output".to_string()),
    })?;

    let path = dir.join(INDEX_FILENAME);
    fs::write(&path, html).map_err(|e| DocError::Output {
        message: format!("Cannot create {}: {}", path.display(), e),
        help: None,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Symbol;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_fill_template() {
        let out = fill_template("<h1>${A}</h1>${B}${MISSING}", |key| match key {
            "A" => Some("one"),
            "B" => Some("${A}"),
            _ => None,
        });

        assert_eq!(out, "<h1>one</h1>${A}${MISSING}");
    }

    #[test]
    fn test_fill_template_unclosed_placeholder() {
        assert_eq!(fill_template("a ${B", |_| Some("x")), "a ${B");
    }

    #[test]
    fn test_render_page() {
        let mut store = SymbolStore::new();
        store.insert(Symbol::new(SymbolKind::Curve, "Throttle", "constfile.txt"));

        let html = PageRenderer::new("Bus")
            .with_template("<title>${TITLE}</title><style>${STYLE}</style>${CURVES}")
            .with_stylesheet("a {\r\n  color: red;\r\n}\r\n")
            .render(&store);

        assert_eq!(
            html,
            "<title>Bus</title><style>a {  color: red;}</style><table><tr><th>Name</th><th>Description</th><th>File</th></tr><tr><td>Throttle</td><td></td><td>constfile.txt</td></tr></table>"
        );
    }

    #[test]
    fn test_default_template_has_every_placeholder() {
        let html = PageRenderer::new("OMSI Script Documentation").render(&SymbolStore::new());

        assert!(!html.contains("${"));
        assert_eq!(html.matches("<table>").count(), 4);
        assert!(html.contains("<title>OMSI Script Documentation</title>"));
    }

    #[test]
    fn test_title_escaped_when_enabled() {
        let html = PageRenderer::new("A & B")
            .with_template("${TITLE}")
            .with_escaping(true)
            .render(&SymbolStore::new());

        assert_eq!(html, "A &amp; B");
    }

    #[test]
    fn test_write_index_creates_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("docs/reference");

        let path = write_index("<html></html>", &out).unwrap();

        assert_eq!(path, out.join(INDEX_FILENAME));
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_index_fails_when_blocked() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("docs");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_index("<html></html>", &blocker);

        assert!(matches!(result, Err(DocError::Output { .. })));
    }
}
