//! Tolerant INI-style key/value reader.
//!
//! Shared by `.vardoc` overlays and the legacy `omsiScriptDoc.ini` settings
//! file. Lines that are not a section header, a comment or a `key=value`
//! pair are ignored rather than rejected.

/// One `key=value` pair and the section it appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    /// Section name as written, empty before the first header.
    pub section: String,
    pub key: String,
    pub value: String,
    /// 1-based line number.
    pub line: usize,
}

impl IniEntry {
    /// Case-insensitive section comparison.
    pub fn in_section(&self, name: &str) -> bool {
        self.section.eq_ignore_ascii_case(name)
    }
}

/// Read all key/value entries from INI-style text.
pub fn parse_ini(source: &str) -> Vec<IniEntry> {
    let mut entries = Vec::new();
    let mut section = String::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        entries.push(IniEntry {
            section: section.clone(),
            key: key.to_string(),
            value: unescape(unquote(value.trim())),
            line: index + 1,
        });
    }

    entries
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Turn `\n` into a line break and `\\` into a backslash.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
