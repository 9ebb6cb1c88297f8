//! Error types for the taskgen CLI.
//!
//! Uses thiserror for derive macros. Every failure is wrapped with the
//! template name or path it concerns and propagated immediately; the first
//! failure halts the run. Embedders calling the generator directly receive
//! these structured values; the CLI maps them to exit codes.

use crate::exit_codes;
use crate::template;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffold generation.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The requested language is not in the supported set.
    ///
    /// The display form is the exact diagnostic the CLI prints.
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// The target-directory existence check failed for a reason other than
    /// not-existing (e.g. permission denied on a parent).
    #[error("failed to check if target directory '{}' exists: {source}", .path.display())]
    DirectoryStat { path: PathBuf, source: io::Error },

    /// The target directory or an output subdirectory could not be created.
    #[error("failed to create directory '{}': {source}", .path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    /// A template source could not produce its contents. Cannot occur for
    /// the embedded registry; indicates a defect in a custom source.
    #[error("failed to read {name} template: {detail}")]
    TemplateRead { name: String, detail: String },

    /// Malformed placeholder syntax in a template.
    #[error("failed to parse {name} template: {source}")]
    TemplateParse {
        name: String,
        source: template::ParseError,
    },

    /// An output file could not be opened for writing.
    #[error("failed to create {} file: {source}", .path.display())]
    FileCreate { path: PathBuf, source: io::Error },

    /// An output file was opened but the rendered text could not be written.
    #[error("failed to write {} file: {source}", .path.display())]
    FileWrite { path: PathBuf, source: io::Error },

    /// Substitution failed while rendering a parsed template.
    #[error("failed to execute {name} template: {source}")]
    TemplateExecute {
        name: String,
        source: template::RenderError,
    },

    /// The host toolchain version could not be resolved.
    #[error("failed to detect go toolchain version: {0}")]
    ToolchainVersion(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UnknownLanguage(_) => exit_codes::USER_ERROR,
            _ => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_has_user_error_exit_code() {
        let err = ScaffoldError::UnknownLanguage("madeuplanguage".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn filesystem_errors_have_generation_failure_exit_code() {
        let err = ScaffoldError::DirectoryCreate {
            path: PathBuf::from("/tmp/out/demo"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);

        let err = ScaffoldError::FileCreate {
            path: PathBuf::from("demo.py"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn toolchain_error_has_generation_failure_exit_code() {
        let err = ScaffoldError::ToolchainVersion("go binary not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn unknown_language_message_names_the_value() {
        let err = ScaffoldError::UnknownLanguage("madeuplanguage".to_string());
        assert_eq!(err.to_string(), "Unsupported language: madeuplanguage");
    }

    #[test]
    fn wrapped_errors_name_the_template() {
        let err = ScaffoldError::TemplateExecute {
            name: "go.mod".to_string(),
            source: template::RenderError::UndefinedVariable {
                name: "RuntimeVersion".to_string(),
                position: 0,
            },
        };
        assert!(err.to_string().contains("go.mod"));
        assert!(err.to_string().contains("RuntimeVersion"));
    }
}
