//! Reporting sink for non-fatal pipeline problems.
//!
//! Parsers and the directory walk never print. They hand every problem to a
//! [`Reporter`], which either prints it (see [`crate::output::Printer`]) or
//! keeps it for later inspection ([`Diagnostics`]).

mod diagnostic;

pub use diagnostic::{Diagnostic, Diagnostics};

/// Diagnostic code for a file that could not be read.
pub const READ: &str = "omsidoc::read";
/// Diagnostic code for a `[const]` value that is not a number.
pub const CONST_VALUE: &str = "omsidoc::const-value";
/// Diagnostic code for a block cut off by the end of the file.
pub const TRUNCATED_BLOCK: &str = "omsidoc::truncated-block";
/// Diagnostic code for a directory that could not be walked.
pub const WALK: &str = "omsidoc::walk";

/// A capability the pipeline reports diagnostics into.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards every diagnostic to an inner reporter while keeping a copy.
///
/// Used by the build command to print warnings as they happen and still
/// count them for the final summary.
pub struct Tee<'a, R: Reporter> {
    inner: &'a mut R,
    seen: Diagnostics,
}

impl<'a, R: Reporter> Tee<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self {
            inner,
            seen: Diagnostics::new(),
        }
    }

    pub fn into_seen(self) -> Diagnostics {
        self.seen
    }
}

impl<R: Reporter> Reporter for Tee<'_, R> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.seen.push(diagnostic.clone());
        self.inner.report(diagnostic);
    }
}
