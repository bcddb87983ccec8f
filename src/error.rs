//! Error handling for the templater.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for templater operations.
///
/// Only "directory already exists" is handled locally; every variant here
/// aborts the run when it reaches the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// A directory under the build directory could not be created
    #[error("Unable to create target directory: {0}")]
    Fatal(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Errors raised by the template engine while loading or rendering
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Text that cannot be decoded from or encoded to the configured encoding
    #[error("Encoding error: {0}.")]
    EncodingError(String),

    /// Represents errors in ignore pattern processing
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// Directory traversal failures
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
