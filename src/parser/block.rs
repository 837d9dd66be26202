//! Const/curve file parser.
//!
//! A constfile is a sequence of lines. A block starts at a line that is
//! exactly `[const]` or `[newcurve]`; the next two lines hold the name and,
//! for `[const]`, a numeric value:
//!
//! ```text
//! Top speed in km/h
//! [const]
//! MaxSpeed
//! 120.5
//!
//! [newcurve]
//! Throttle
//!
//! [pnt]
//! 0
//! 0.25
//! ```
//!
//! Every other line is free text. The non-blank lines directly above a
//! marker become that block's description.

use std::fmt;

const CONST_MARKER: &str = "[const]";
const CURVE_MARKER: &str = "[newcurve]";
const POINT_MARKER: &str = "[pnt]";

/// Which marker opened a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Const,
    Curve,
}

impl BlockKind {
    fn from_marker(line: &str) -> Option<Self> {
        match line {
            CONST_MARKER => Some(BlockKind::Const),
            CURVE_MARKER => Some(BlockKind::Curve),
            _ => None,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            BlockKind::Const => CONST_MARKER,
            BlockKind::Curve => CURVE_MARKER,
        }
    }
}

/// A parsed `[const]` or `[newcurve]` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub name: String,
    /// Parsed value of a `[const]` block. `None` for curves and for
    /// constants whose value line is not a number.
    pub value: Option<f64>,
    pub description: String,
    /// 1-based line of the marker.
    pub line: usize,
}

/// A non-fatal problem found while parsing blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockIssue {
    /// A `[const]` value line that is not a number. The block is still kept.
    InvalidValue { literal: String, line: usize },
    /// A marker without both following lines. The block is dropped.
    Truncated { kind: BlockKind, line: usize },
}

impl fmt::Display for BlockIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockIssue::InvalidValue { literal, line } => {
                write!(f, "invalid const value \"{}\" (line {})", literal, line)
            }
            BlockIssue::Truncated { kind, line } => {
                write!(
                    f,
                    "early end of file after {} (line {})",
                    kind.marker(),
                    line
                )
            }
        }
    }
}

/// Everything found in one constfile.
#[derive(Debug, Default)]
pub struct BlockFile {
    pub blocks: Vec<Block>,
    pub issues: Vec<BlockIssue>,
}

fn is_marker(line: &str) -> bool {
    matches!(line, CONST_MARKER | CURVE_MARKER | POINT_MARKER)
}

/// Parse a constfile into blocks, collecting problems instead of failing.
pub fn parse_block_file(source: &str) -> BlockFile {
    let lines: Vec<&str> = source.lines().collect();
    let mut result = BlockFile::default();

    // Trailing blank lines cannot hold a name or value.
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut i = 0;
    while i < end {
        let Some(kind) = BlockKind::from_marker(lines[i]) else {
            i += 1;
            continue;
        };

        if i + 2 >= end {
            result.issues.push(BlockIssue::Truncated { kind, line: i + 1 });
            i += 1;
            continue;
        }

        let name = lines[i + 1];
        let value = match kind {
            BlockKind::Const => {
                let literal = lines[i + 2];
                match literal.trim().parse::<f64>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        result.issues.push(BlockIssue::InvalidValue {
                            literal: literal.to_string(),
                            line: i + 3,
                        });
                        None
                    }
                }
            }
            BlockKind::Curve => None,
        };

        result.blocks.push(Block {
            kind,
            name: name.to_string(),
            value,
            description: harvest_description(&lines, i),
            line: i + 1,
        });

        // A marker in a data line still opens its own block.
        i += 1;
    }

    result
}

/// Collect the contiguous non-blank lines above `marker`.
///
/// Stops at a blank line, at a marker, and at any line that is one of the
/// two data lines following a marker, so point coordinates and values of
/// the previous block never leak into this description.
fn harvest_description(lines: &[&str], marker: usize) -> String {
    let mut collected = Vec::new();

    for k in (0..marker).rev() {
        let line = lines[k];
        if line.trim().is_empty() || is_marker(line) {
            break;
        }
        if (k >= 1 && is_marker(lines[k - 1])) || (k >= 2 && is_marker(lines[k - 2])) {
            break;
        }
        collected.push(line);
    }

    collected.reverse();
    collected.join("\n")
}
