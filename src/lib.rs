//! omsidoc - HTML reference generator for OMSI scripts
//!
//! A library for collecting the variables, string variables, constants and
//! curves of an OMSI script folder and rendering them as a static HTML page.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod report;
pub mod store;

pub use discovery::{classify, discover, walk, Category, DiscoveryResult, Settings, WorkingFiles};
pub use error::{DocError, Result};
pub use parser::{parse_block_file, parse_list, parse_overlay, Block, BlockKind, Overlay};
pub use render::{write_index, PageRenderer, TableRenderer};
pub use report::{Diagnostic, Diagnostics, Reporter};
pub use store::{RefKind, SourceLocation, Symbol, SymbolKind, SymbolStore};
