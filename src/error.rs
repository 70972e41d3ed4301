//! Error types for the vscroll binary.
//!
//! Each layer has its own `thiserror` enum and they compose into
//! [`AppError`] through `From`, so `main` can use `?` throughout.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`InputError`] - reading the lines to display
//!   - [`ConfigError`] - reading or parsing the config file
//!   - [`LoggingError`] - installing the log file subscriber
//!   - [`TuiError`] - terminal setup and drawing
//!
//! Scroller setup problems are not part of this hierarchy: a scroller with
//! missing host resources logs the problem and stays inert.
//! See [`SetupError`](crate::scroller::SetupError).

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the lines to display.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors encountered when reading history lines from a file.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use vscroll::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.txt"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The given file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The file is not valid UTF-8 text.
    #[error("File is not UTF-8 text: {path}")]
    NotText {
        /// Offending file.
        path: PathBuf,
    },

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
