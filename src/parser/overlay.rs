//! `.vardoc` documentation overlay parser.
//!
//! An overlay is an INI-style file with a `[vars]` and a `[stringvars]`
//! section mapping variable names to descriptions:
//!
//! ```text
//! [vars]
//! Speed=Current vehicle speed in km/h
//!
//! [stringvars]
//! Destination=Text on the destination sign
//! ```
//!
//! Entries in any other section are ignored.

use std::collections::BTreeMap;

use super::ini::parse_ini;

const VARS_SECTION: &str = "vars";
const STRING_VARS_SECTION: &str = "stringvars";

/// Descriptions from one overlay file, keyed by variable name.
#[derive(Debug, Default, PartialEq)]
pub struct Overlay {
    pub vars: BTreeMap<String, String>,
    pub string_vars: BTreeMap<String, String>,
}

impl Overlay {
    pub fn len(&self) -> usize {
        self.vars.len() + self.string_vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse an overlay. A key repeated within a section keeps its last value.
pub fn parse_overlay(source: &str) -> Overlay {
    let mut overlay = Overlay::default();

    for entry in parse_ini(source) {
        if entry.in_section(VARS_SECTION) {
            overlay.vars.insert(entry.key, entry.value);
        } else if entry.in_section(STRING_VARS_SECTION) {
            overlay.string_vars.insert(entry.key, entry.value);
        }
    }

    overlay
}
