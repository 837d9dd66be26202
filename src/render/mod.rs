//! Rendering module for omsidoc.
//!
//! This module turns a symbol store into HTML tables and substitutes them
//! into a page template.

mod html;
mod page;

pub use html::{escape_html, TableRenderer};
pub use page::{
    fill_template, write_index, PageRenderer, DEFAULT_STYLESHEET, DEFAULT_TEMPLATE, INDEX_FILENAME,
};
