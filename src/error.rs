//! Error handling for the rnt application.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Error types for rnt operations.
///
/// Every variant is fatal for the current run. The stage-specific variants
/// (`ScaffoldError`, `InstallError`, `WriteError`) tell the operator where
/// the pipeline stopped.
#[derive(Error, Debug)]
pub enum Error {
    /// An answer failed validation; the run never starts
    #[error("Validation error: invalid '{field}': {reason}.")]
    ValidationError { field: String, reason: String },

    /// The target project directory is already present on disk
    #[error("Output directory '{output_dir}' already exists. Choose another project name.")]
    OutputDirectoryExistsError { output_dir: String },

    /// The base project could not be created
    #[error("Scaffold failed: {0}.")]
    ScaffoldError(String),

    /// A dependency installation step failed
    #[error("Install failed: {0}.")]
    InstallError(String),

    /// The filesystem rejected a directory creation or file write
    #[error("Write failed for '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An external command could not be started or exited unsuccessfully
    #[error("command '{command}' {reason}")]
    CommandError { command: String, reason: String },

    /// The generator was asked to run again after finishing or failing
    #[error("Generation cannot resume from the '{0}' stage.")]
    InvalidStageError(String),

    /// Preloaded answers could not be parsed
    #[error("Answers error: {0}.")]
    AnswersError(String),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

impl Error {
    /// Shorthand for building a [`Error::ValidationError`].
    pub fn validation<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Error::ValidationError { field: field.into(), reason: reason.into() }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
