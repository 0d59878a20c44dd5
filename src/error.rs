//! Error types and handling for requp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for requp operations
#[derive(Error, Diagnostic, Debug)]
pub enum RequpError {
    #[error("{message}")]
    #[diagnostic(
        code(requp::usage),
        help("Usage: requp <dependency1> [dependency2 ...] [path/to/requirements.txt]")
    )]
    Usage { message: String },

    #[error("Failed to create directory '{path}': {reason}")]
    #[diagnostic(
        code(requp::fs::dir_create_failed),
        help("Check that the path is writable")
    )]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to read manifest '{path}': {reason}")]
    #[diagnostic(
        code(requp::manifest::read_failed),
        help("Check that the file is readable and valid UTF-8")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to append to manifest '{path}': {reason}")]
    #[diagnostic(code(requp::manifest::append_failed))]
    ManifestAppendFailed { path: String, reason: String },
}

/// Convenience Result type using RequpError
pub type Result<T> = miette::Result<T, RequpError>;

/// Creates a usage error
pub fn usage(message: impl Into<String>) -> RequpError {
    RequpError::Usage {
        message: message.into(),
    }
}
