use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a rejected command line apart from a build that
/// could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Build evaluated (or catalog listed) successfully
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unknown component, unreadable catalog, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the build configuration engine and its adapters.
///
/// Missing components are not errors: an incomplete build simply estimates
/// to zero. Only references to things that do not exist end up here.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Component '{id}' not found in category '{category}'\n\n💡 Hint: Available {category} ids: {available}")]
    ComponentNotFound {
        category: String,
        id: String,
        available: String,
    },

    #[error("Unknown workload: '{id}'\n\n💡 Hint: Available workloads: {available}")]
    InvalidWorkload { id: String, available: String },

    #[error("Unknown component category: '{name}'\n\n💡 Hint: Use one of processor, graphics, memory, storage, mainboard, power-supply")]
    UnknownCategory { name: String },

    #[error("Invalid selection '{input}': {reason}\n\n💡 Hint: Selections use the form CATEGORY=ID, e.g. gpu=rtx-4070")]
    InvalidSelection { input: String, reason: String },

    #[error("Invalid catalog data: {message}")]
    CatalogValidation { message: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog file is valid TOML with [[component]] tables")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
