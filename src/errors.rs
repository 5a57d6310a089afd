/*!
 * Error types for the org2mdx application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a single document
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A source block opened without a language token after the marker
    #[error("Source block without language tag on line {line_number}: {line:?}")]
    MissingLanguageTag {
        /// One-based line number in the source document
        line_number: usize,
        /// The offending marker line
        line: String,
    },

    /// A source file name that does not start with a `<year>-<month>-<day>-` prefix
    #[error("Invalid source file name {0:?}: expected <year>-<month>-<day>-<slug>")]
    InvalidFileName(String),

    /// Copying an image asset into its destination directory failed
    #[error("Failed to copy image {source_path:?} to {dest_dir:?}: {message}")]
    AssetCopy {
        /// Resolved path of the referenced image
        source_path: PathBuf,
        /// Directory the image should have been copied into
        dest_dir: PathBuf,
        /// Underlying failure
        message: String,
    },
}

/// Application errors raised outside document conversion
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),
}
