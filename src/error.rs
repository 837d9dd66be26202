use miette::Diagnostic;
use thiserror::Error;

/// Main error type for omsidoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(omsidoc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(omsidoc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(omsidoc::output))]
    Output {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DocError>;
