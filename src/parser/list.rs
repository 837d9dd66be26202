//! Flat name-list parser.
//!
//! Varlists and stringvarlists hold one symbol name per line. Lines are
//! taken verbatim; only empty lines are dropped.

/// Parse a varlist or stringvarlist into symbol names in file order.
pub fn parse_list(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
