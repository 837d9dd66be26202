//! Parsers for OMSI script data files.
//!
//! Three line-based formats are understood:
//! - varlists and stringvarlists: one symbol name per line
//! - constfiles: `[const]` and `[newcurve]` blocks with free-text comments
//! - `.vardoc` overlays: INI-style `name=description` pairs
//!
//! Parsers never fail. Problems that matter to the user are returned next to
//! the parsed data so the caller can report them with file context.
//!
//! # Usage
//!
//! ```ignore
//! use omsidoc::parser::parse_block_file;
//!
//! let source = std::fs::read_to_string("constfile.txt")?;
//! let file = parse_block_file(&source);
//!
//! for block in file.blocks {
//!     println!("Found: {}", block.name);
//! }
//! ```

pub mod block;
pub mod ini;
pub mod list;
pub mod overlay;

pub use block::{parse_block_file, Block, BlockFile, BlockIssue, BlockKind};
pub use ini::{parse_ini, IniEntry};
pub use list::parse_list;
pub use overlay::{parse_overlay, Overlay};
